mod classifier;
mod pinch_history;

pub use classifier::GestureClassifier;
