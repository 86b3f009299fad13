use crate::geometry::PathCommand;
use crate::types::WorldPoint;

/// Serialize path commands to SVG-style path data.
///
/// Format: `M 40 20 L 120 20 Q 160 20 160 60`
///
/// Whole numbers are printed without a decimal point, fractional values
/// as-is (e.g. `97.5`).
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut parts = Vec::with_capacity(commands.len());
    for command in commands {
        match command {
            PathCommand::MoveTo(p) => {
                parts.push(format!("M {} {}", fmt_num(p.x), fmt_num(p.y)));
            }
            PathCommand::LineTo(p) => {
                parts.push(format!("L {} {}", fmt_num(p.x), fmt_num(p.y)));
            }
            PathCommand::QuadTo { control, to } => {
                parts.push(format!(
                    "Q {} {} {} {}",
                    fmt_num(control.x),
                    fmt_num(control.y),
                    fmt_num(to.x),
                    fmt_num(to.y)
                ));
            }
        }
    }
    parts.join(" ")
}

fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Parse SVG-style path data back into path commands.
///
/// Accepts only the subset `path_data` emits: absolute `M`, `L` and `Q` with
/// whitespace-separated operands. Returns `None` if the string is malformed.
pub fn parse_path_data(s: &str) -> Option<Vec<PathCommand>> {
    let mut tokens = s.split_whitespace();
    let mut commands = Vec::new();

    while let Some(op) = tokens.next() {
        match op {
            "M" => {
                let p = parse_point(&mut tokens)?;
                if !commands.is_empty() {
                    return None; // Only one subpath.
                }
                commands.push(PathCommand::MoveTo(p));
            }
            "L" => {
                if commands.is_empty() {
                    return None; // Must start with M.
                }
                commands.push(PathCommand::LineTo(parse_point(&mut tokens)?));
            }
            "Q" => {
                if commands.is_empty() {
                    return None;
                }
                let control = parse_point(&mut tokens)?;
                let to = parse_point(&mut tokens)?;
                commands.push(PathCommand::QuadTo { control, to });
            }
            _ => return None,
        }
    }

    if commands.is_empty() {
        return None;
    }
    Some(commands)
}

fn parse_point<'a, I>(tokens: &mut I) -> Option<WorldPoint>
where
    I: Iterator<Item = &'a str>,
{
    let x: f64 = tokens.next()?.parse().ok()?;
    let y: f64 = tokens.next()?.parse().ok()?;
    Some(WorldPoint::new(x, y))
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn p(x: f64, y: f64) -> WorldPoint {
        WorldPoint::new(x, y)
    }

    #[test]
    fn emits_lines() {
        let commands = vec![
            PathCommand::MoveTo(p(0.0, 0.0)),
            PathCommand::LineTo(p(100.0, 0.0)),
            PathCommand::LineTo(p(100.0, 50.0)),
        ];
        assert_eq!(path_data(&commands), "M 0 0 L 100 0 L 100 50");
    }

    #[test]
    fn emits_quads() {
        let commands = vec![
            PathCommand::MoveTo(p(0.0, 0.0)),
            PathCommand::LineTo(p(90.0, 0.0)),
            PathCommand::QuadTo {
                control: p(100.0, 0.0),
                to: p(100.0, 10.0),
            },
        ];
        assert_eq!(path_data(&commands), "M 0 0 L 90 0 Q 100 0 100 10");
    }

    #[test]
    fn fractional_coordinates_keep_their_decimals() {
        let commands = vec![
            PathCommand::MoveTo(p(0.5, 0.0)),
            PathCommand::LineTo(p(97.5, 0.0)),
        ];
        assert_eq!(path_data(&commands), "M 0.5 0 L 97.5 0");
    }

    #[test]
    fn round_trip() {
        let commands = vec![
            PathCommand::MoveTo(p(0.0, 0.0)),
            PathCommand::LineTo(p(90.0, 0.0)),
            PathCommand::QuadTo {
                control: p(100.0, 0.0),
                to: p(100.0, 10.0),
            },
            PathCommand::LineTo(p(100.0, 50.5)),
        ];
        let parsed = parse_path_data(&path_data(&commands)).unwrap();
        assert_eq!(parsed, commands);
    }

    #[test]
    fn rejects_missing_move() {
        assert!(parse_path_data("L 1 2").is_none());
    }

    #[test]
    fn rejects_truncated_operands() {
        assert!(parse_path_data("M 1").is_none());
        assert!(parse_path_data("M 1 2 L 3").is_none());
        assert!(parse_path_data("M 1 2 Q 3 4 5").is_none());
    }

    #[test]
    fn rejects_unknown_ops_and_empty() {
        assert!(parse_path_data("M 1 2 X 3 4").is_none());
        assert!(parse_path_data("").is_none());
        assert!(parse_path_data("   ").is_none());
    }

    #[test]
    fn rejects_second_subpath() {
        assert!(parse_path_data("M 1 2 L 3 4 M 5 6").is_none());
    }
}
