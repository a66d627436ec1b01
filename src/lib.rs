#![no_std]
#![feature(type_alias_impl_trait)]

pub mod config;
pub mod controllers;
pub mod infrastructure;
