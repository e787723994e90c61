use fmtspec::{
    Curried, Spec, boolean, cat, custom, float, int, literal, sprintf, sprintf1, sprintf2,
    sprintf3, string, uncurry3,
};

fn movie() -> Spec<String, Curried<String, Curried<i64, Curried<f64, String>>>> {
    cat(
        cat(
            cat(
                cat(cat(literal("Movie: "), string()), literal("; Rating: ")),
                int(),
            ),
            literal("; Price: $"),
        ),
        float(),
    )
}

fn account() -> Spec<String, Curried<String, Curried<i64, Curried<bool, String>>>> {
    cat(
        cat(
            cat(cat(cat(literal("Name: "), string()), literal("; Age: ")), int()),
            literal("; Acct. Active: "),
        ),
        boolean(),
    )
}

fn show_int_list(values: Vec<i64>) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// Three pieces, each generic over the result type so they can be grouped
// either way.
fn x<A: 'static>() -> Spec<A, Curried<String, A>> {
    cat(literal("x="), string())
}

fn y<A: 'static>() -> Spec<A, Curried<i64, A>> {
    cat(literal(", y="), int())
}

fn z<A: 'static>() -> Spec<A, Curried<bool, A>> {
    cat(cat(literal(", z="), boolean()), literal("."))
}

#[test]
fn test_movie_listing() {
    let text = sprintf3(&movie(), "Inside Out".to_string(), 5, 24.99);
    assert_eq!(text, "Movie: Inside Out; Rating: 5; Price: $24.99");
}

#[test]
fn test_literal_only() {
    assert_eq!(sprintf(&literal("Hello, Gleam!")), "Hello, Gleam!");
}

#[test]
fn test_custom_list_renderer() {
    let spec = cat(cat(literal("["), custom(show_int_list)), literal("]"));
    assert_eq!(sprintf1(&spec, vec![1, 2, 3]), "[1; 2; 3]");
}

#[test]
fn test_curried_and_uncurried_discharge_agree() {
    let spec = account();
    let curried = sprintf(&spec)("Juan".to_string())(45)(true);
    let fixed = sprintf3(&spec, "Juan".to_string(), 45, true);
    let uncurried = uncurry3(sprintf(&spec), "Juan".to_string(), 45, true);
    let tupled = spec.format(("Juan".to_string(), 45, true));

    assert_eq!(curried, "Name: Juan; Age: 45; Acct. Active: True");
    assert_eq!(fixed, curried);
    assert_eq!(uncurried, curried);
    assert_eq!(tupled, curried);
}

#[test]
fn test_identity_for_many_literals() {
    for text in ["", " ", "a", "Name: ", "multi\nline", "tab\there", "{}", "ß∂ƒ"] {
        assert_eq!(sprintf(&literal(text)), text);
    }
}

#[test]
fn test_associativity() {
    let left_grouped = cat(cat(x(), y()), z());
    let right_grouped = cat(x(), cat(y(), z()));

    for (s, n, b) in [("a", 1, true), ("", -7, false), ("long text", i64::MAX, true)] {
        assert_eq!(
            sprintf3(&left_grouped, s.to_string(), n, b),
            sprintf3(&right_grouped, s.to_string(), n, b)
        );
    }
    assert_eq!(
        sprintf3(&left_grouped, "a".to_string(), 1, true),
        "x=a, y=1, z=True."
    );
}

#[test]
fn test_order_preservation() {
    let a = cat(cat(literal("<"), int()), cat(literal("|"), int()));
    let b = cat(cat(literal("|"), string()), literal(">"));
    let both = cat(a, b);

    let a_alone = cat(cat(literal("<"), int()), cat(literal("|"), int()));
    let b_alone = cat(cat(literal("|"), string()), literal(">"));
    let expected = sprintf2(&a_alone, 1, 2) + &sprintf1(&b_alone, "three".to_string());

    assert_eq!(sprintf3(&both, 1, 2, "three".to_string()), expected);
    assert_eq!(expected, "<1|2|three>");
}

#[test]
fn test_fewer_arguments_leave_a_callable() {
    let spec = movie();
    let titled = sprintf(&spec)("Up".to_string());
    let rated = titled(4);
    assert_eq!(rated(9.5), "Movie: Up; Rating: 4; Price: $9.5");
    assert_eq!(rated(10.25), "Movie: Up; Rating: 4; Price: $10.25");
}

#[test]
fn test_shared_across_threads() {
    let spec = account();
    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|age| {
                let spec = &spec;
                scope.spawn(move || sprintf3(spec, format!("user{age}"), age, age % 2 == 0))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for (age, text) in results.iter().enumerate() {
        let active = if age % 2 == 0 { "True" } else { "False" };
        assert_eq!(
            text,
            &format!("Name: user{age}; Age: {age}; Acct. Active: {active}")
        );
    }
}

#[test]
fn test_nested_spec_in_renderer() {
    let entry = cat(cat(string(), literal("=")), int());
    let entries = custom(move |pairs: Vec<(String, i64)>| {
        pairs
            .into_iter()
            .map(|(key, value)| sprintf2(&entry, key, value))
            .collect::<Vec<_>>()
            .join(", ")
    });
    let spec = cat(cat(literal("{"), entries), literal("}"));
    let text = sprintf1(&spec, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
    assert_eq!(text, "{a=1, b=2}");
}
