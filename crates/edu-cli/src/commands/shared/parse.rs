use edu_core::enums::Role;
use serde::de::DeserializeOwned;

/// Parse an enum value through its serde spellings and aliases.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_lowercase().replace('-', "_");
    let json = serde_json::Value::String(normalized);
    serde_json::from_value(json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

pub fn parse_role(raw: &str) -> anyhow::Result<Role> {
    parse_enum(raw, "role")
}

#[cfg(test)]
mod tests {
    use edu_core::enums::{CourseStatus, Role};

    use super::{parse_enum, parse_role};

    #[test]
    fn parses_spanish_and_english_roles() {
        assert_eq!(parse_role("estudiante").expect("role should parse"), Role::Student);
        assert_eq!(parse_role("Teacher").expect("role should parse"), Role::Teacher);
        assert_eq!(
            parse_role(" coordinador ").expect("role should parse"),
            Role::Coordinator
        );
    }

    #[test]
    fn parses_other_enums() {
        let status: CourseStatus = parse_enum("aprobado", "status").expect("status should parse");
        assert_eq!(status, CourseStatus::Approved);
    }

    #[test]
    fn errors_on_invalid_role() {
        let err = parse_role("rector").expect_err("should fail");
        assert!(err.to_string().contains("invalid role 'rector'"));
    }
}
