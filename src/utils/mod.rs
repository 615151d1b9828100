//! Small helpers shared by the feature modules.

/// Convert every element of a list with its `From` conversion.
pub fn map_list<S, T: From<S>>(source: Vec<S>) -> Vec<T> {
    source.into_iter().map(T::from).collect()
}
