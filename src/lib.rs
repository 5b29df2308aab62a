// Trivia game logic
pub mod core;

// Winner display
pub mod display;

// Startup settings
pub mod config;

// Services (command routing, scheduling)
pub mod services;

// API models (requests/responses)
pub mod models;

// HTTP routes
pub mod routes;

// Application state
pub mod state;
