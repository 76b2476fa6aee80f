pub mod errors;
pub mod logging;

// Dioxus hooks (fullstack: both client and server)
pub mod hooks;
