pub mod admin;
pub mod bulk;
pub mod city;
pub mod dropshipper;
pub mod order;
pub mod permission;
pub mod product;
pub mod staff;
pub mod state;
pub mod supplier;
pub mod warehouse;
