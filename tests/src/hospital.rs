mod invariants;
mod scenarios;
