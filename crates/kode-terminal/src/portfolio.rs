//! Portfolio content: the home directory tree and the neofetch banner.

use serde::Serialize;

use kode_types::config::TerminalConfig;
use kode_types::error::Result;
use kode_vfs::{ROOT, StaticVfs};

/// Path of the projects directory.
pub const PROJECTS_DIR: &str = "~/projects";

/// Summary printed by the `projects` / `work` aliases.
pub const PROJECTS_SUMMARY: &str = "List of projects: Project Alpha, System Tool, YouTube Shorts. \
     Type 'cd projects' then 'ls' to see files.";

const ABOUT: &str = "Divyanshu Yadav is a 20-year-old Software Engineering student and developer \
     from Mau, India. He specializes in building immersive digital experiences.";

const CONTACT: &str = "Email: hello@divyanshu.com\n\
     GitHub: github.com/divyanshuyadav98s\n\
     LinkedIn: linkedin.com/in/divyanshu";

/// `skills.json`, serialized in field order.
#[derive(Debug, Serialize)]
struct Skills {
    core: &'static [&'static str],
    tools: &'static [&'static str],
    other: &'static [&'static str],
}

const SKILLS: Skills = Skills {
    core: &["HTML/CSS", "JavaScript", "React", "Tailwind", "Three.js"],
    tools: &["Git", "GitHub", "VS Code"],
    other: &["PC Software Dev", "Content Creation"],
};

/// Build the portfolio tree:
///
/// ```text
/// ~/about.md  ~/skills.json  ~/contact.txt  ~/projects/  ~/.env
/// ~/projects/project_alpha.txt  system_tool.exe  youtube_shorts.mp4
/// ```
pub fn build_portfolio_vfs() -> Result<StaticVfs> {
    let skills = serde_json::to_string_pretty(&SKILLS)?;
    StaticVfs::builder()
        .file(ROOT, "about.md", ABOUT)
        .file(ROOT, "skills.json", skills)
        .file(ROOT, "contact.txt", CONTACT)
        .subdir(ROOT, "projects")
        .file(ROOT, ".env", "PERMISSION DENIED")
        .file(
            PROJECTS_DIR,
            "project_alpha.txt",
            "A responsive web application built with React and Tailwind CSS.",
        )
        .file(PROJECTS_DIR, "system_tool.exe", "Binary file not shown.")
        .file(PROJECTS_DIR, "youtube_shorts.mp4", "Video file not shown.")
        .build()
}

const NEOFETCH_ART: &str = r"
            .-/+oossssoo+/-.               {identity}
        :`:+ssssssssssssssssss+:`           {rule}
      -+sssssssssssssssssssyyssss+-         OS: KODE_OS 1.0 LTS x86_64
    .ossssssssssssssssssdMMMNysssso.       Host: Portfolio Web
   /ssssssssssshdmmNNmmyNMMMMhssssss/      Kernel: 5.15.0-91-generic
  +ssssssssshmydMMMMMMMNddddyssssssss+     Uptime: Forever
 /sssssssshNMMMyhhyyyyhmNMMMNhssssssss/    Packages: 1 (npm)
.ssssssssdMMMNhsssssssssshNMMMdssssssss.   Shell: bash 5.1.16
+sssshhhyNMMNyssssssssssssyNMMMysssssss+   Resolution: {resolution}
ossyNMMMNyMMhsssssssssssssshmmmhssssssso   Theme: Brutalist Dark
ossyNMMMNyMMhsssssssssssssshmmmhssssssso   Font: Space Mono / Consolas
+sssshhhyNMMNyssssssssssssyNMMMysssssss+   CPU: Creative Flow (100%)
.ssssssssdMMMNhsssssssssshNMMMdssssssss.   GPU: WebGL Renderer
 /sssssssshNMMMyhhyyyyhmNMMMNhssssssss/    Memory: 128MB / 16GB
  +ssssssssshmydMMMMMMMNddddyssssssss+
   /ssssssssssshdmmNNmmyNMMMMhssssss/
    .ossssssssssssssssssdMMMNysssso.
      -+sssssssssssssssssssyyssss+-
        `:+ssssssssssssssssss+:`
            .-/+oossssoo+/-.
";

/// Render the neofetch banner for the configured identity and display size.
pub fn neofetch(config: &TerminalConfig) -> String {
    let identity = config.prompt_identity();
    let rule = "-".repeat(identity.chars().count());
    let resolution = format!("{}x{}", config.viewport_width, config.viewport_height);
    NEOFETCH_ART
        .replace("{identity}", &identity)
        .replace("{rule}", &rule)
        .replace("{resolution}", &resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kode_vfs::Entry;

    #[test]
    fn portfolio_tree_is_valid() {
        let vfs = build_portfolio_vfs().unwrap();
        assert_eq!(vfs.dir_count(), 2);
        assert!(vfs.is_dir(PROJECTS_DIR));
        assert_eq!(vfs.lookup(ROOT, "projects"), Some(&Entry::Dir));
    }

    #[test]
    fn root_listing_order() {
        let vfs = build_portfolio_vfs().unwrap();
        let names: Vec<&str> = vfs
            .readdir(ROOT)
            .unwrap()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["about.md", "skills.json", "contact.txt", "projects", ".env"]
        );
    }

    #[test]
    fn skills_json_is_pretty_and_ordered() {
        let vfs = build_portfolio_vfs().unwrap();
        let skills = vfs.read(ROOT, "skills.json").unwrap();
        assert!(skills.starts_with("{\n  \"core\": [\n    \"HTML/CSS\","));
        let core = skills.find("\"core\"").unwrap();
        let tools = skills.find("\"tools\"").unwrap();
        let other = skills.find("\"other\"").unwrap();
        assert!(core < tools && tools < other);
        let parsed: serde_json::Value = serde_json::from_str(skills).unwrap();
        assert_eq!(parsed["tools"][2], "VS Code");
    }

    #[test]
    fn contact_is_three_lines() {
        let vfs = build_portfolio_vfs().unwrap();
        let contact = vfs.read(ROOT, "contact.txt").unwrap();
        assert_eq!(contact.lines().count(), 3);
        assert!(contact.starts_with("Email: hello@divyanshu.com\nGitHub:"));
    }

    #[test]
    fn about_text_is_single_spaced() {
        let vfs = build_portfolio_vfs().unwrap();
        let about = vfs.read(ROOT, "about.md").unwrap();
        assert!(!about.contains("  "));
        assert!(about.contains("developer from Mau, India."));
    }

    #[test]
    fn neofetch_fills_placeholders() {
        let banner = neofetch(&TerminalConfig::default());
        assert!(banner.starts_with('\n'));
        assert!(banner.ends_with(".-/+oossssoo+/-.\n"));
        assert!(banner.contains("guest@divyanshu.dev\n"));
        assert!(banner.contains(&format!("{}\n", "-".repeat(19))));
        assert!(banner.contains("Resolution: 1920x1080"));
        assert!(!banner.contains('{'));
        assert!(banner.chars().count() > 100);
    }
}
