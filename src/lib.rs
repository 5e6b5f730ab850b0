pub mod error;

pub mod db;
