pub mod booth;
pub mod conference;
pub mod language;
pub mod shift;
pub mod talk;
pub mod translator;
pub mod user;
