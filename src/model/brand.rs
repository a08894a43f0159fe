use crate::model::{generate_id, Id};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: Id,
    pub brand_name: String,
    pub founding_date: Option<NaiveDate>,
}

impl Brand {
    pub fn url(&self) -> String {
        format!("/catalog/brand/{}", self.id)
    }

    /// Medium-format founding date ("Jul 4, 1926"), empty when unknown.
    pub fn lifespan(&self) -> String {
        match self.founding_date {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => String::new(),
        }
    }

    /// ISO calendar date ("1926-07-04") for date inputs, empty when unknown.
    pub fn founding_date_ymd(&self) -> String {
        match self.founding_date {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => String::new(),
        }
    }
}

/// Input model for creating or replacing a brand
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBrand {
    pub brand_name: String,
    pub founding_date: Option<NaiveDate>,
}

impl NewBrand {
    /// Convert to a full Brand with a server-generated id
    pub fn into_brand(self) -> Brand {
        self.into_brand_with_id(generate_id())
    }

    /// Convert to a full Brand keeping an existing id (the replace path)
    pub fn into_brand_with_id(self, id: Id) -> Brand {
        Brand {
            id,
            brand_name: self.brand_name,
            founding_date: self.founding_date,
        }
    }

    pub fn founding_date_ymd(&self) -> String {
        match self.founding_date {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => String::new(),
        }
    }
}
