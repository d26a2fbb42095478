pub mod counter_attack;
pub mod engine;
pub mod state;
pub mod turn_bar;

#[cfg(test)]
mod tests;
