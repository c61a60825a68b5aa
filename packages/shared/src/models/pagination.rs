use serde::{Deserialize, Serialize};

use crate::validate::{Validate, ValidationError, ValidationResult};

/// Page selection shared by every search body. Pages are 1-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: u32,
    pub limit: u32,
    pub records: u64,
    pub pages: u32,
}

/// Envelope returned by list and search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub pagination: Pagination,
    pub data: Vec<T>,
}

impl<T: Validate> Validate for Page<T> {
    fn validate(&self) -> ValidationResult {
        let p = &self.pagination;
        if p.limit > 0 {
            if self.data.len() > p.limit as usize {
                return Err(ValidationError::new(
                    "data",
                    format!("{} items exceed limit {}", self.data.len(), p.limit),
                ));
            }
            let expected_pages = p.records.div_ceil(u64::from(p.limit));
            if u64::from(p.pages) != expected_pages {
                return Err(ValidationError::new(
                    "pagination.pages",
                    format!(
                        "{} records at limit {} span {} pages, got {}",
                        p.records, p.limit, expected_pages, p.pages
                    ),
                ));
            }
        }
        if self.data.len() as u64 > p.records {
            return Err(ValidationError::new(
                "pagination.records",
                format!("{} items but only {} records", self.data.len(), p.records),
            ));
        }
        self.data.validate().map_err(|e| e.within("data"))
    }
}
