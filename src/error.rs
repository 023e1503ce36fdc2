// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// A stored document that could not be decoded.
#[derive(Error, Debug)]
#[error("document '{key}' is malformed: {source}")]
pub struct ParseError {
    pub key: String,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage backend failed: {0}")]
    Backend(#[from] rusqlite::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("could not encode document '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejections raised at the input boundary, before anything reaches the engine.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid amount and date.")]
    InvalidAmount(String),
    #[error("Please enter a valid amount and date.")]
    MissingDate,
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Unknown transaction type '{0}' (use income|expense)")]
    UnknownKind(String),
    #[error("Please provide a name, positive amount and months > 0.")]
    InvalidGoal,
    #[error("Unknown habit '{0}' (use log_daily|no_food_delivery|review_dashboard)")]
    UnknownHabit(String),
}
