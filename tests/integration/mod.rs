//! Integration tests for the aethertree explorer core

mod cli_contracts;
mod listing_roundtrip;
mod parser_properties;
mod reference_listing;
