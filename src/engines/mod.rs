//! Search engine implementations.

mod serpapi;

pub use serpapi::SerpApi;
