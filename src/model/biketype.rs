use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BikeType {
    pub id: Id,
    pub name: String,
}

impl BikeType {
    pub fn url(&self) -> String {
        format!("/catalog/biketype/{}", self.id)
    }
}

/// Input model for creating or replacing a bike type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBikeType {
    pub name: String,
}

impl NewBikeType {
    pub fn into_biketype(self) -> BikeType {
        self.into_biketype_with_id(generate_id())
    }

    pub fn into_biketype_with_id(self, id: Id) -> BikeType {
        BikeType {
            id,
            name: self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_derived_from_id() {
        let biketype = BikeType {
            id: "t-9".to_string(),
            name: "Cruiser".to_string(),
        };
        assert_eq!(biketype.url(), "/catalog/biketype/t-9");
    }
}
