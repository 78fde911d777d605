//! Database entities module

pub mod doctor_fee;
