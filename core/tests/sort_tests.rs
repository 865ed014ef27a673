use fracsort::{Rational, insertion_sort, insertion_sort_by, insertion_sort_rationals};

#[test]
fn test_sort_integers() {
    let items = vec![3, 1, 2];
    let sorted = insertion_sort(&items);

    assert_eq!(sorted, vec![1, 2, 3]);
    assert_eq!(items, vec![3, 1, 2]);
}

#[test]
fn test_sort_strings() {
    let items = vec!["banana".to_string(), "apple".to_string()];
    let sorted = insertion_sort(&items);

    assert_eq!(sorted, vec!["apple", "banana"]);
    assert_eq!(items, vec!["banana", "apple"]);
}

#[test]
fn test_sort_rationals() {
    let items = vec![
        Rational::new(3, 4).unwrap(),
        Rational::new(1, 2).unwrap(),
        Rational::new(1, 3).unwrap(),
    ];
    let sorted = insertion_sort_rationals(&items);

    let rendered: Vec<String> = sorted.iter().map(Rational::to_string).collect();
    assert_eq!(rendered, vec!["1/3", "1/2", "3/4"]);

    let original: Vec<String> = items.iter().map(Rational::to_string).collect();
    assert_eq!(original, vec!["3/4", "1/2", "1/3"]);
}

#[test]
fn test_sort_rationals_mixed_signs_and_forms() {
    let items: Vec<Rational> = [(1, -2), (2, 4), (-3, -4), (0, 5), (-1, 3)]
        .into_iter()
        .map(|(n, d)| Rational::new(n, d).unwrap())
        .collect();
    let sorted = insertion_sort_rationals(&items);

    let rendered: Vec<String> = sorted.iter().map(Rational::to_string).collect();
    assert_eq!(rendered, vec!["1/-2", "-1/3", "0/5", "2/4", "-3/-4"]);
}

#[test]
fn test_sort_rationals_keeps_equal_values_in_order() {
    let items: Vec<Rational> = [(2, 4), (1, 3), (1, 2), (3, 6)]
        .into_iter()
        .map(|(n, d)| Rational::new(n, d).unwrap())
        .collect();
    let sorted = insertion_sort(&items);

    let terms: Vec<_> = sorted.iter().map(Rational::split).collect();
    assert_eq!(terms, vec![(1, 3), (2, 4), (1, 2), (3, 6)]);
}

#[test]
fn test_sort_by_descending() {
    let sorted = insertion_sort_by(&[1, 5, 3, 4], |a, b| a > b);
    assert_eq!(sorted, vec![5, 4, 3, 1]);
}
