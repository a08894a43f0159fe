use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

/// A motorcycle model. `brand` and `biketype` hold ids of the referenced
/// records; the store does not enforce that they resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: Id,
    pub model_name: String,
    pub brand: Id,
    pub power: String,
    pub yt_url: String,
    pub biketype: Vec<Id>,
}

impl Model {
    pub fn url(&self) -> String {
        format!("/catalog/model/{}", self.id)
    }
}

/// Input model for creating or replacing a motorcycle model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewModel {
    pub model_name: String,
    pub brand: Id,
    pub power: String,
    pub yt_url: String,
    pub biketype: Vec<Id>,
}

impl NewModel {
    pub fn into_model(self) -> Model {
        self.into_model_with_id(generate_id())
    }

    pub fn into_model_with_id(self, id: Id) -> Model {
        Model {
            id,
            model_name: self.model_name,
            brand: self.brand,
            power: self.power,
            yt_url: self.yt_url,
            biketype: self.biketype,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_derived_from_id() {
        let model = NewModel {
            model_name: "Monster 821".to_string(),
            brand: "b-1".to_string(),
            power: "109 hp".to_string(),
            yt_url: "https://youtu.be/abc".to_string(),
            biketype: vec!["t-1".to_string()],
        }
        .into_model_with_id("m-5".to_string());
        assert_eq!(model.url(), "/catalog/model/m-5");
    }
}
