//! Plain data types shared by the API client and the actor layer.

pub mod relationship_list;

pub use relationship_list::*;
