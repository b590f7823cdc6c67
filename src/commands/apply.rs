use crate::patch::{self, Report, Targets};

/// Apply the VPN customisations to every target.
///
/// Workflow per target, in fixed order (config, style, script):
/// 1. Read the file and re-scan its content for the customisation
/// 2. Already present: record `unchanged`, write nothing
/// 3. Otherwise: write the `.bak` backup, then the patched content
///    atomically (temp sibling + rename)
///
/// Failures are recorded per target; the remaining targets still run.
pub fn run(targets: &Targets) -> Report {
    patch::apply(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::config::MODULE_KEY;
    use crate::patch::jsonc;
    use crate::patch::{Outcome, script, style};
    use std::fs;
    use tempfile::tempdir;

    const CONFIG: &str = r#"{
  // regenerated by the update process
  "layer": "top",
  "modules-right": [
    "pulseaudio",
    "group/tray-expander",
    "clock"
  ],
  "clock": {
    "format": "{:%H:%M}"
  }
}"#;
    const STYLE: &str = "window#waybar {\n  background: transparent;\n}\n";

    fn seed(root: &std::path::Path) -> Targets {
        fs::write(root.join("config.jsonc"), CONFIG).unwrap();
        fs::write(root.join("style.css"), STYLE).unwrap();
        Targets::in_root(root)
    }

    #[test]
    fn end_to_end_fresh_setup() {
        let dir = tempdir().unwrap();
        let targets = seed(dir.path());

        let report = run(&targets);

        assert_eq!(report.targets[0].result, Ok(Outcome::Patched));
        assert_eq!(report.targets[1].result, Ok(Outcome::Patched));
        assert_eq!(report.targets[2].result, Ok(Outcome::Created));

        // Config carries both halves of the module registration
        let config = fs::read_to_string(&targets.config).unwrap();
        let parsed = jsonc::parse(&config).unwrap();
        assert!(
            parsed["modules-right"]
                .as_array()
                .unwrap()
                .iter()
                .any(|m| m == MODULE_KEY)
        );
        assert!(parsed.get(MODULE_KEY).is_some());

        // Stylesheet gained exactly one rule block
        let sheet = fs::read_to_string(&targets.style).unwrap();
        assert_eq!(sheet.matches(style::SELECTOR).count(), 1);

        // Script exists with the generated content and the execute bit
        let script_bytes = fs::read(&targets.script).unwrap();
        assert_eq!(script_bytes, script::content().as_bytes());
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&targets.script).unwrap().permissions().mode();
            assert_eq!(mode & 0o111, 0o111);
        }

        // Backups for the two pre-existing targets only
        assert!(dir.path().join("config.jsonc.bak").exists());
        assert!(dir.path().join("style.css.bak").exists());
        assert!(!dir.path().join("scripts/vpn-toggle.sh.bak").exists());
    }

    #[test]
    fn second_run_is_a_no_op() {
        let dir = tempdir().unwrap();
        let targets = seed(dir.path());

        run(&targets);
        let config_after_first = fs::read_to_string(&targets.config).unwrap();
        let style_after_first = fs::read_to_string(&targets.style).unwrap();

        // Remove the backups so a second run would be caught re-creating them
        fs::remove_file(dir.path().join("config.jsonc.bak")).unwrap();
        fs::remove_file(dir.path().join("style.css.bak")).unwrap();

        let report = run(&targets);

        for target in &report.targets {
            assert_eq!(target.result, Ok(Outcome::Unchanged));
            assert!(target.backup.is_none());
        }
        assert_eq!(
            fs::read_to_string(&targets.config).unwrap(),
            config_after_first
        );
        assert_eq!(
            fs::read_to_string(&targets.style).unwrap(),
            style_after_first
        );
        assert!(!dir.path().join("config.jsonc.bak").exists());
        assert!(!dir.path().join("style.css.bak").exists());
    }

    #[test]
    fn backups_hold_pre_run_contents() {
        let dir = tempdir().unwrap();
        let targets = seed(dir.path());

        let report = run(&targets);

        let config_backup = report.targets[0].backup.as_ref().unwrap();
        let style_backup = report.targets[1].backup.as_ref().unwrap();
        assert_eq!(fs::read_to_string(config_backup).unwrap(), CONFIG);
        assert_eq!(fs::read_to_string(style_backup).unwrap(), STYLE);
    }

    #[test]
    fn reformatted_stylesheet_is_not_patched_twice() {
        let dir = tempdir().unwrap();
        let targets = seed(dir.path());
        // A compacted rendition of the rule, as a reformat pass could produce
        fs::write(
            &targets.style,
            "window#waybar{background:transparent}#custom-vpn{min-width:12px}\n",
        )
        .unwrap();

        let report = run(&targets);

        assert_eq!(report.targets[1].result, Ok(Outcome::Unchanged));
        let sheet = fs::read_to_string(&targets.style).unwrap();
        assert_eq!(sheet.matches(style::SELECTOR).count(), 1);
    }

    #[test]
    fn reset_config_is_repatched() {
        let dir = tempdir().unwrap();
        let targets = seed(dir.path());

        run(&targets);
        // Upstream update regenerates the config without the module
        fs::write(&targets.config, CONFIG).unwrap();

        let report = run(&targets);

        assert_eq!(report.targets[0].result, Ok(Outcome::Patched));
        assert_eq!(report.targets[1].result, Ok(Outcome::Unchanged));
        let parsed = jsonc::parse(&fs::read_to_string(&targets.config).unwrap()).unwrap();
        assert!(parsed.get(MODULE_KEY).is_some());
    }

    #[test]
    fn stale_backup_is_replaced_with_prior_contents() {
        let dir = tempdir().unwrap();
        let targets = seed(dir.path());
        fs::write(dir.path().join("config.jsonc.bak"), "from an older run").unwrap();

        run(&targets);

        assert_eq!(
            fs::read_to_string(dir.path().join("config.jsonc.bak")).unwrap(),
            CONFIG
        );
    }
}
