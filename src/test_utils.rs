#[cfg(test)]
pub fn to_symbols(symbols: &[&str]) -> Vec<String> {
    symbols.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
pub fn to_merges(pairs: &[(&str, &str)]) -> crate::MergeTable {
    let mut merges = crate::MergeTable::new();
    for (left, right) in pairs {
        merges.push(left, right);
    }
    merges
}
