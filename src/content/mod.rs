pub mod background;
pub mod headlines;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Not enough headlines: wanted {wanted}, have {available}")]
    NotEnoughHeadlines { wanted: usize, available: usize },
}
