//! Supabase-style REST backend.
//!
//! One client serves as auth provider, data provider and message transport:
//! GoTrue password grants under `/auth/v1`, PostgREST tables under `/rest/v1`.

mod client;
mod dto;
mod error;

pub use client::{
    CONVERSATIONS_TABLE, FEEDBACK_TABLE, METRICS_TABLE, OUTBOUND_TABLE, SupabaseClient,
    TRAVELERS_TABLE,
};
pub use error::SupabaseError;
