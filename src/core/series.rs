pub type Point<K, V> = (K, V);

/// Ordered key-value pairs. Used instead of a map wherever the insertion
/// order of the keys is part of the contract.
pub type Series<K, V> = Vec<Point<K, V>>;
