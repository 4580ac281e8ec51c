//! CSV → SQLite → JOIN → regression, end to end.

use hedonics::db::{create_table_from_dataset, query_to_dataset};
use hedonics::{fit_formula, Dataset, Formula, OlsOptions};
use rusqlite::Connection;

const SALES_CSV: &str = "\
sale_id,age,price
1,2,246
2,5,224
3,8,206
4,11,188
5,3,236
6,7,216
7,12,182
8,9,204
9,4,234
10,6,218
";

const SPECS_CSV: &str = "\
sale_id,passengers
1,4
2,2
3,2
4,2
5,2
6,4
7,2
8,4
9,4
10,2
";

// price = 250 - 6*age + 2*passengers, exactly.

#[test]
fn sample_rows_lie_on_the_stated_plane() {
    // Guards the fixture itself: every row must satisfy the formula above,
    // or the exact-recovery assertions below are meaningless.
    let conn = setup();
    let data = query_to_dataset(
        &conn,
        "SELECT a.price, a.age, b.passengers
         FROM Sales AS a
         LEFT JOIN Specs AS b ON a.sale_id = b.sale_id",
    )
    .unwrap();
    let price = data.column("price").unwrap();
    let age = data.column("age").unwrap();
    let passengers = data.column("passengers").unwrap();
    for i in 0..data.n_rows() {
        let expected = 250.0 - 6.0 * age[i] + 2.0 * passengers[i];
        assert!(
            (price[i] - expected).abs() < 1e-12,
            "row {}: price {} but formula gives {expected}",
            i + 1,
            price[i]
        );
    }
}

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    let sales = Dataset::from_csv_reader(SALES_CSV.as_bytes()).unwrap();
    let specs = Dataset::from_csv_reader(SPECS_CSV.as_bytes()).unwrap();
    create_table_from_dataset(&mut conn, "Sales", &sales).unwrap();
    create_table_from_dataset(&mut conn, "Specs", &specs).unwrap();
    conn
}

#[test]
fn simple_model_from_plain_select() {
    let conn = setup();
    let data = query_to_dataset(&conn, "SELECT age, price FROM Sales").unwrap();
    assert_eq!(data.n_rows(), 10);

    let model = fit_formula(
        &data,
        &Formula::parse("price ~ age").unwrap(),
        &OlsOptions::default(),
    )
    .unwrap();
    let core = &model.result().core;
    // passengers varies too, so the bivariate slope sits near -6 without
    // matching it exactly
    assert!((core.coefficients[0] - (-6.0)).abs() < 0.5);
    assert!(core.r_squared > 0.98);
}

#[test]
fn joined_model_recovers_exact_coefficients() {
    let conn = setup();
    let data = query_to_dataset(
        &conn,
        "SELECT a.price, a.age, b.passengers
         FROM Sales AS a
         LEFT JOIN Specs AS b
             ON a.sale_id = b.sale_id",
    )
    .unwrap();

    let model = fit_formula(
        &data,
        &Formula::parse("price ~ age + passengers").unwrap(),
        &OlsOptions::default(),
    )
    .unwrap();
    let core = &model.result().core;
    assert!((core.intercept.unwrap() - 250.0).abs() < 1e-6);
    assert!((core.coefficients[0] - (-6.0)).abs() < 1e-6);
    assert!((core.coefficients[1] - 2.0).abs() < 1e-6);
    assert!((core.r_squared - 1.0).abs() < 1e-9);

    let summary = model.to_string();
    assert!(summary.contains("price ~ age + passengers"));
    assert!(summary.contains("Intercept"));
}

#[test]
fn unmatched_rows_are_dropped_by_the_fit() {
    let conn = setup();
    // A sale with no matching spec row: LEFT JOIN yields NULL passengers,
    // which the fit filters out.
    conn.execute("INSERT INTO Sales VALUES (11, 10.0, 190.0)", [])
        .unwrap();

    let data = query_to_dataset(
        &conn,
        "SELECT a.price, a.age, b.passengers
         FROM Sales AS a
         LEFT JOIN Specs AS b
             ON a.sale_id = b.sale_id",
    )
    .unwrap();
    assert_eq!(data.n_rows(), 11);

    let model = fit_formula(
        &data,
        &Formula::parse("price ~ age + passengers").unwrap(),
        &OlsOptions::default(),
    )
    .unwrap();
    assert_eq!(model.result().core.n_observations, 10);
    assert!((model.result().core.coefficients[0] - (-6.0)).abs() < 1e-6);
}

#[test]
fn predictions_follow_the_fitted_line() {
    let conn = setup();
    let data = query_to_dataset(
        &conn,
        "SELECT a.price, a.age, b.passengers
         FROM Sales AS a
         LEFT JOIN Specs AS b ON a.sale_id = b.sale_id",
    )
    .unwrap();
    let model = fit_formula(
        &data,
        &Formula::parse("price ~ age + passengers").unwrap(),
        &OlsOptions::default(),
    )
    .unwrap();

    let new_data = Dataset::from_columns([
        ("age".to_string(), vec![1.0, 20.0]),
        ("passengers".to_string(), vec![2.0, 4.0]),
    ])
    .unwrap();
    let pred = model.predict(&new_data).unwrap();
    assert!((pred[0] - (250.0 - 6.0 + 4.0)).abs() < 1e-6);
    assert!((pred[1] - (250.0 - 120.0 + 8.0)).abs() < 1e-6);
}
