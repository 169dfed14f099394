use crate::utils::error::ApiError;
use std::fmt;
use std::str::FromStr;

/// 後端提供的資源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Orders,
    Plants,
    Inventory,
    Messages,
    Employees,
    Suppliers,
    Customers,
    Reports,
    Notifications,
}

impl Resource {
    pub const ALL: [Resource; 9] = [
        Resource::Orders,
        Resource::Plants,
        Resource::Inventory,
        Resource::Messages,
        Resource::Employees,
        Resource::Suppliers,
        Resource::Customers,
        Resource::Reports,
        Resource::Notifications,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Orders => "orders",
            Resource::Plants => "plants",
            Resource::Inventory => "inventory",
            Resource::Messages => "messages",
            Resource::Employees => "employees",
            Resource::Suppliers => "suppliers",
            Resource::Customers => "customers",
            Resource::Reports => "reports",
            Resource::Notifications => "notifications",
        }
    }

    /// 集合路徑，例如 `/orders`
    pub fn path(&self) -> String {
        format!("/{}", self.name())
    }

    /// 單筆路徑，例如 `/orders/42`
    pub fn item_path(&self, id: &str) -> String {
        format!("/{}/{}", self.name(), id.trim_matches('/'))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Resource::ALL
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ApiError::InvalidConfigValueError {
                field: "resource".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unknown resource. Valid resources: {}",
                    Resource::ALL.map(|r| r.name()).join(", ")
                ),
            })
    }
}
