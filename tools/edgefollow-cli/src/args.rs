//! Parsers for comma-separated geometry arguments.

use edgefollow_model::geometry::{ElementSize, Point, Rect};

fn parse_fields<'a, const N: usize>(
    input: &'a str,
    what: &str,
) -> Result<[&'a str; N], String> {
    let fields: Vec<&'a str> = input.split(',').map(str::trim).collect();
    fields.try_into().map_err(|fields: Vec<&'a str>| {
        format!(
            "expected {N} comma-separated values for {what}, got {}",
            fields.len()
        )
    })
}

fn parse_num<T: std::str::FromStr>(field: &str, name: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    field
        .parse()
        .map_err(|e| format!("invalid {name} '{field}': {e}"))
}

/// Parse `X,Y,WIDTH,HEIGHT`.
pub fn parse_rect(input: &str) -> Result<Rect, String> {
    let [x, y, w, h] = parse_fields::<4>(input, "X,Y,WIDTH,HEIGHT")?;
    Ok(Rect::new(
        parse_num(x, "x")?,
        parse_num(y, "y")?,
        parse_num(w, "width")?,
        parse_num(h, "height")?,
    ))
}

/// Parse `X,Y`.
pub fn parse_point(input: &str) -> Result<Point, String> {
    let [x, y] = parse_fields::<2>(input, "X,Y")?;
    Ok(Point::new(parse_num(x, "x")?, parse_num(y, "y")?))
}

/// Parse `WIDTH,HEIGHT`.
pub fn parse_size(input: &str) -> Result<ElementSize, String> {
    let [w, h] = parse_fields::<2>(input, "WIDTH,HEIGHT")?;
    Ok(ElementSize::new(parse_num(w, "width")?, parse_num(h, "height")?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rect() {
        assert_eq!(parse_rect("0,0,500,300"), Ok(Rect::new(0, 0, 500, 300)));
        assert_eq!(parse_rect(" -10, 5 ,20,30"), Ok(Rect::new(-10, 5, 20, 30)));
        assert!(parse_rect("0,0,500").is_err());
        assert!(parse_rect("0,0,-5,3").unwrap_err().contains("width"));
    }

    #[test]
    fn test_parse_point_and_size() {
        assert_eq!(parse_point("-3,4"), Ok(Point::new(-3, 4)));
        assert!(parse_point("x,4").is_err());
        assert_eq!(parse_size("200,100"), Ok(ElementSize::new(200, 100)));
        assert!(parse_size("200").unwrap_err().contains("expected 2"));
    }
}
