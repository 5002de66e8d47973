//! Scene-level tests that run whole steps through the collision engine
