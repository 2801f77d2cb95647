use optval::Opt;

fn lookup(table: &[(&str, u32)], key: &str) -> Opt<u32> {
  table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v).into()
}

#[test]
fn chains_combinators_without_branching_on_the_variant() {
  let table = [("alpha", 1), ("beta", 2)];

  let described = lookup(&table, "beta")
    .map(|v| v * 10)
    .flat_map(|v| if v > 10 { Opt::Some(format!("big {v}")) } else { Opt::None })
    .unwrap_or_else(|| "missing".to_string());
  assert_eq!(described, "big 20");

  let fallback = lookup(&table, "gamma")
    .or_else(|| lookup(&table, "alpha"))
    .map_or_else(|| "missing".to_string(), |v| v.to_string());
  assert_eq!(fallback, "1");
}

#[test]
fn discarded_values_behave_like_a_genuine_none() {
  let table = [("alpha", 1)];

  let dropped = lookup(&table, "alpha").drop();
  assert_eq!(dropped, Opt::None);
  assert_eq!(dropped.and(Opt::Some(9)), Opt::None);
  assert_eq!(dropped.or(Opt::Some(9)), Opt::Some(9));
  assert_eq!(dropped.map(|v| v + 1), Opt::None);
  assert_eq!(dropped.unwrap_or(0), 0);
}

#[cfg(all(feature = "serde", feature = "future"))]
#[tokio::test]
async fn serializes_and_bridges_the_same_value() {
  let opt = Opt::Some(42);
  assert_eq!(serde_json::to_value(opt).unwrap(), serde_json::json!({ "is_some": true, "value": 42 }));
  assert_eq!(opt.await, Ok(42));
}
