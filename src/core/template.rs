use crate::domain::model::Identifier;

/// Renders the day solution stub for `identifier`.
///
/// Pure: the same identifier always yields byte-identical output.
pub fn render(identifier: &Identifier) -> String {
    format!(
        r#"fn main() {{
    println!("Day {id}, part 1: {{}}", part1());
    println!("Day {id}, part 2: {{}}", part2());
}}

fn part1() -> i32 {{
  unimplemented!();
}}
fn part2() -> i32 {{
  unimplemented!();
}}

#[cfg(test)]
mod tests {{
    use super::*;
    use std::{{fs::File, io::BufReader}};

    #[test]
    fn test_solution() {{
    }}
}}
"#,
        id = identifier
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_7: &str = r#"fn main() {
    println!("Day 7, part 1: {}", part1());
    println!("Day 7, part 2: {}", part2());
}

fn part1() -> i32 {
  unimplemented!();
}
fn part2() -> i32 {
  unimplemented!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs::File, io::BufReader};

    #[test]
    fn test_solution() {
    }
}
"#;

    #[test]
    fn test_render_day_7() {
        assert_eq!(render(&Identifier::new("7")), DAY_7);
    }

    #[test]
    fn test_render_is_pure() {
        let id = Identifier::new("12");
        assert_eq!(render(&id), render(&id));
    }

    #[test]
    fn test_render_non_numeric_identifier() {
        let rendered = render(&Identifier::new("12b"));
        assert!(rendered.contains(r#""Day 12b, part 1: {}""#));
        assert!(rendered.contains(r#""Day 12b, part 2: {}""#));
    }

    #[test]
    fn test_placeholders_abort_instead_of_returning() {
        let rendered = render(&Identifier::new("1"));
        assert_eq!(rendered.matches("unimplemented!();").count(), 2);
    }

    #[test]
    fn test_test_module_is_cfg_gated() {
        let rendered = render(&Identifier::new("1"));
        assert!(rendered.contains("#[cfg(test)]\nmod tests {"));
        assert!(rendered.contains("use std::{fs::File, io::BufReader};"));
        assert!(rendered.contains("fn test_solution() {\n    }"));
    }
}
