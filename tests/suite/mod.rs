mod cli;
mod config;
mod decision;
mod deck_flow;
