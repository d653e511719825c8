/// Splits a component name into its base and numeric variant suffix.
///
/// `Card2` is variant 2 of `Card`; a name without trailing digits is a
/// component with a single structural implementation. A name that is all
/// digits, or whose suffix overflows, is treated as having no variant.
pub fn split_variant(name: &str) -> (&str, Option<u32>) {
    let digits = name
        .bytes()
        .rev()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 || digits == name.len() {
        return (name, None);
    }
    let split = name.len() - digits;
    match name[split..].parse() {
        Ok(number) => (&name[..split], Some(number)),
        Err(_) => (name, None),
    }
}
