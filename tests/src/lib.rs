#![cfg(test)]

mod addresses;
mod submission;
