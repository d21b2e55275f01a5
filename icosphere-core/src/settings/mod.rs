pub mod schema;

use std::path::Path;

use anyhow::{Context, Result};
pub use schema::{IcosphereSettings, Limits};

pub fn load_from_yaml_str(s: &str) -> Result<IcosphereSettings> {
    let settings: IcosphereSettings = serde_yaml::from_str(s)?;
    Ok(settings)
}

pub fn load_from_json_str(s: &str) -> Result<IcosphereSettings> {
    let settings: IcosphereSettings = serde_json::from_str(s)?;
    Ok(settings)
}

/// Load settings from disk. `.json` files are read as JSON, anything else as YAML.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<IcosphereSettings> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        load_from_json_str(&data).with_context(|| format!("invalid JSON in {}", path.display()))
    } else {
        load_from_yaml_str(&data).with_context(|| format!("invalid YAML in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IcosphereError;

    #[test]
    fn empty_yaml_uses_defaults() {
        let s = load_from_yaml_str("{}").unwrap();
        assert_eq!(s, IcosphereSettings::default());
        assert_eq!(s.radius, 1.0);
        assert_eq!(s.subdivision, 2);
        assert!(!s.has_uv);
        assert_eq!(s.limits.max_subdivision, 8);
    }

    #[test]
    fn yaml_accepts_editor_field_name() {
        let s = load_from_yaml_str("radius: 0.5\nsubdivision: 3\nhasUV: true\n").unwrap();
        assert_eq!(s.radius, 0.5);
        assert_eq!(s.subdivision, 3);
        assert!(s.has_uv);
    }

    #[test]
    fn json_round_trip_fields() {
        let s = load_from_json_str(r#"{"radius": 2.0, "has_uv": true, "limits": {"max_subdivision": 4}}"#).unwrap();
        assert_eq!(s.radius, 2.0);
        assert_eq!(s.subdivision, 2);
        assert!(s.has_uv);
        assert_eq!(s.limits.max_subdivision, 4);
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(load_from_yaml_str("radius: [1, 2").is_err());
        assert!(load_from_json_str("{\"radius\": \"big\"}").is_err());
    }

    #[test]
    fn validate_enforces_limit() {
        let s = IcosphereSettings { subdivision: 9, ..Default::default() };
        assert_eq!(s.validate(), Err(IcosphereError::SubdivisionLimit { level: 9, max: 8 }));
        let s = IcosphereSettings { radius: 0.0, ..Default::default() };
        assert_eq!(s.validate(), Err(IcosphereError::InvalidRadius(0.0)));
    }

    #[test]
    fn settings_generate_honors_uv_flag() {
        let s = IcosphereSettings { has_uv: true, ..Default::default() };
        let mesh = s.generate().unwrap();
        assert_eq!(mesh.vertex_count(), 240);
        assert!(mesh.uvs.is_some());
    }

    #[test]
    fn load_from_path_picks_format_by_extension() {
        let dir = std::env::temp_dir();
        let json = dir.join(format!("icosphere-settings-{}.json", std::process::id()));
        let yaml = dir.join(format!("icosphere-settings-{}.yaml", std::process::id()));
        std::fs::write(&json, r#"{"subdivision": 4}"#).unwrap();
        std::fs::write(&yaml, "subdivision: 5\n").unwrap();
        assert_eq!(load_from_path(&json).unwrap().subdivision, 4);
        assert_eq!(load_from_path(&yaml).unwrap().subdivision, 5);
        std::fs::remove_file(json).ok();
        std::fs::remove_file(yaml).ok();
        assert!(load_from_path(dir.join("does-not-exist.yaml")).is_err());
    }
}
