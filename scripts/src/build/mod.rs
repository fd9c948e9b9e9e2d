//! Access to the compiled contracts the scripts deploy

pub mod artifact;
