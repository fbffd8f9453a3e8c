mod determinism;
mod serialize;
