use serde::{Deserialize, Serialize};

/// Owner reference populated by the backend; `null` once the user is gone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionOwner {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
}

/// Plan reference populated by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub owner: Option<SubscriptionOwner>,
    #[serde(default)]
    pub plan: Option<SubscriptionPlan>,
    #[serde(default)]
    pub credits: i64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl Subscription {
    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref().map(|o| o.user_name.as_str())
    }

    pub fn owner_email(&self) -> Option<&str> {
        self.owner.as_ref().map(|o| o.email.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_owner() {
        let json = r#"{ "_id": "s1", "userId": null, "plan": { "name": "Pro", "price": 9.5 },
                        "credits": 40, "startDate": "2024-03-01", "endDate": "2024-04-01", "__v": 0 }"#;
        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert!(sub.owner.is_none());
        assert_eq!(sub.owner_name(), None);
        assert_eq!(sub.plan.as_ref().unwrap().name, "Pro");
        assert_eq!(sub.credits, 40);
    }

    #[test]
    fn test_populated_owner() {
        let json = r#"{ "_id": "s2", "userId": { "userName": "ann", "email": "ann@x.io" } }"#;
        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.owner_name(), Some("ann"));
        assert_eq!(sub.owner_email(), Some("ann@x.io"));
        assert!(sub.plan.is_none());
    }
}
