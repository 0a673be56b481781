//! Transform: build a new sequence from the results of a callback.
//!
//! The output always has the same length as the input, and the element at
//! position `i` is the callback's result for the input element at `i`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! map(|x| x.clone(), s) == s
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! map(g, &map(f, s)) == map(|x| g(&f(x)), s)
//! ```

use super::infallible;

/// Runs `transform` over `sequence`, stopping at the first error.
fn try_map_pass<T, Z, E, F>(
    operation: &'static str,
    mut transform: F,
    sequence: &[T],
) -> Result<Vec<Z>, E>
where
    F: FnMut(&T, usize) -> Result<Z, E>,
{
    trace_pass!(operation, sequence.len());
    let mut transformed = Vec::with_capacity(sequence.len());
    for (index, element) in sequence.iter().enumerate() {
        match transform(element, index) {
            Ok(value) => transformed.push(value),
            Err(error) => {
                trace_abort!(operation, index);
                return Err(error);
            }
        }
    }
    Ok(transformed)
}

/// Creates a new `Vec` populated with the results of calling `transform`
/// on every element of `sequence`.
///
/// The transform is called once per element, from first to last. An empty
/// sequence yields an empty `Vec` without calling it.
///
/// # Arguments
///
/// * `transform` - A function from a borrowed element to the output value
/// * `sequence` - The elements to transform
///
/// # Returns
///
/// A `Vec` of the same length as `sequence`
///
/// # Examples
///
/// ```rust
/// use fpseq::sequence::map;
///
/// let numbers = vec![1, 2, 3, 4];
/// let doubled = map(|element| element * 2, &numbers);
/// assert_eq!(doubled, vec![2, 4, 6, 8]);
///
/// let words = ["hello", "world"];
/// let shouted = map(|word| word.to_uppercase(), &words);
/// assert_eq!(shouted, vec!["HELLO".to_string(), "WORLD".to_string()]);
/// ```
#[must_use]
pub fn map<T, Z, F>(mut transform: F, sequence: &[T]) -> Vec<Z>
where
    F: FnMut(&T) -> Z,
{
    infallible(try_map_pass(
        "map",
        |element, _| Ok(transform(element)),
        sequence,
    ))
}

/// Same as [`map`], except `transform` also receives the zero-based
/// position of the current element.
///
/// # Examples
///
/// ```rust
/// use fpseq::sequence::map_indexed;
///
/// let numbers: Vec<usize> = vec![1, 2, 3, 4];
/// let scaled = map_indexed(|element, index| index * element, &numbers);
/// assert_eq!(scaled, vec![0, 2, 6, 12]);
/// ```
#[must_use]
pub fn map_indexed<T, Z, F>(mut transform: F, sequence: &[T]) -> Vec<Z>
where
    F: FnMut(&T, usize) -> Z,
{
    infallible(try_map_pass(
        "map_indexed",
        |element, index| Ok(transform(element, index)),
        sequence,
    ))
}

/// Like [`map`], but `transform` may fail.
///
/// # Errors
///
/// Returns the first error produced by `transform`, exactly as produced.
/// Elements after the failing one are not visited.
///
/// # Examples
///
/// ```rust
/// use fpseq::sequence::try_map;
///
/// let inputs = ["1", "2", "x", "4"];
/// let parsed = try_map(|text| text.parse::<i32>(), &inputs);
/// assert!(parsed.is_err());
///
/// let parsed = try_map(|text| text.parse::<i32>(), &inputs[..2]);
/// assert_eq!(parsed, Ok(vec![1, 2]));
/// ```
#[cfg(feature = "fallible")]
pub fn try_map<T, Z, E, F>(mut transform: F, sequence: &[T]) -> Result<Vec<Z>, E>
where
    F: FnMut(&T) -> Result<Z, E>,
{
    try_map_pass("try_map", |element, _| transform(element), sequence)
}

/// Like [`map_indexed`], but `transform` may fail.
///
/// # Errors
///
/// Returns the first error produced by `transform`, exactly as produced.
#[cfg(feature = "fallible")]
pub fn try_map_indexed<T, Z, E, F>(transform: F, sequence: &[T]) -> Result<Vec<Z>, E>
where
    F: FnMut(&T, usize) -> Result<Z, E>,
{
    try_map_pass("try_map_indexed", transform, sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: String,
        age: u32,
    }

    #[rstest]
    #[case(vec![1, 2, 3, 4], vec![2, 4, 6, 8])]
    #[case(vec![-5], vec![-10])]
    #[case(vec![], vec![])]
    fn map_doubles_every_element(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(map(|element| element * 2, &input), expected);
    }

    #[rstest]
    fn map_changes_element_type() {
        let numbers = vec![1, 2, 3, 4];
        let rendered: Vec<String> = map(ToString::to_string, &numbers);
        assert_eq!(rendered, vec!["1", "2", "3", "4"]);
    }

    #[rstest]
    fn map_projects_struct_field() {
        let people = vec![
            Person {
                name: "Amit".to_string(),
                age: 27,
            },
            Person {
                name: "Rinat".to_string(),
                age: 27,
            },
        ];
        let names = map(|person| person.name.clone(), &people);
        assert_eq!(names, vec!["Amit".to_string(), "Rinat".to_string()]);
        assert_eq!(people[0].age, 27);
    }

    #[rstest]
    fn map_leaves_input_untouched() {
        let numbers = vec![1, 2, 3, 4];
        let _ = map(|element| element * 2, &numbers);
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn map_allocates_exact_capacity() {
        let numbers = vec![1, 2, 3, 4, 5];
        let result = map(|element| element + 1, &numbers);
        assert_eq!(result.capacity(), numbers.len());
    }

    #[rstest]
    fn map_indexed_passes_ascending_positions() {
        let letters = ['a', 'b', 'c'];
        let positions = map_indexed(|_, index| index, &letters);
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[rstest]
    fn map_indexed_multiplies_by_position() {
        let numbers: Vec<usize> = vec![1, 2, 3, 4];
        assert_eq!(
            map_indexed(|element, index| index * element, &numbers),
            vec![0, 2, 6, 12]
        );
    }

    #[cfg(feature = "fallible")]
    #[rstest]
    fn try_map_stops_at_first_error() {
        let mut visited = Vec::new();
        let result: Result<Vec<i32>, String> = try_map(
            |element: &i32| {
                visited.push(*element);
                if *element == 3 {
                    Err(format!("rejected {element}"))
                } else {
                    Ok(element * 10)
                }
            },
            &[1, 2, 3, 4, 5],
        );
        assert_eq!(result, Err("rejected 3".to_string()));
        assert_eq!(visited, vec![1, 2, 3]);
    }

    #[cfg(feature = "fallible")]
    #[rstest]
    fn try_map_indexed_succeeds_like_map_indexed() {
        let numbers: Vec<usize> = vec![1, 2, 3, 4];
        let result: Result<Vec<usize>, ()> =
            try_map_indexed(|element, index| Ok(index * element), &numbers);
        assert_eq!(result, Ok(map_indexed(|element, index| index * element, &numbers)));
    }
}
