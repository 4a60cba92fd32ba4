//! The Thing resource and its accepted input fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Thing {
    pub id: i64,
    pub name: String,
    pub status: Option<String>,
}

impl Thing {
    pub fn location(&self) -> String {
        format!("/thing/{}", self.id)
    }
}

/// The only fields a client may set. Anything else in the request is dropped here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ThingParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ThingParams {
    /// Overlay `other`: fields it sets win.
    pub fn merge(self, other: ThingParams) -> ThingParams {
        ThingParams {
            name: other.name.or(self.name),
            status: other.status.or(self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_null_status() {
        let thing = Thing { id: 1, name: "widget".into(), status: None };
        assert_eq!(
            serde_json::to_string(&thing).unwrap(),
            r#"{"id":1,"name":"widget","status":null}"#
        );
        assert_eq!(thing.location(), "/thing/1");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let params: ThingParams =
            serde_json::from_str(r#"{"name":"a","id":7,"owner":"root"}"#).unwrap();
        assert_eq!(params, ThingParams { name: Some("a".into()), status: None });
    }

    #[test]
    fn merge_prefers_later_fields() {
        let query = ThingParams { name: Some("q".into()), status: Some("s".into()) };
        let body = ThingParams { name: Some("b".into()), status: None };
        assert_eq!(
            query.merge(body),
            ThingParams { name: Some("b".into()), status: Some("s".into()) }
        );
    }
}
