use crate::{BoardConfig, Cell};

/// Renders a finished tour as a numbered grid.
///
/// Each cell shows the 1-based position at which the tour visited it, or a
/// dot if the tour never reached it.
pub fn visualize_tour(config: &BoardConfig, sequence: &[Cell]) -> String {
    let mut order: Vec<Option<usize>> = vec![None; config.num_cells()];
    for (n, &cell) in sequence.iter().enumerate() {
        order[config.index_of(cell)] = Some(n + 1);
    }
    // Wide enough for the largest possible visit number
    let width = config.num_cells().to_string().len();

    let horizontal_border = "─".repeat((width + 1) * config.columns() as usize + 1);
    let mut result = format!("╭{}╮", horizontal_border);
    for row in 0..config.rows() {
        result.push_str("\n│");
        for column in 0..config.columns() {
            match order[config.index_of(Cell { row, column })] {
                Some(n) => result += &format!(" {:>width$}", n),
                None => result += &format!(" {:>width$}", "·"),
            }
        }
        result.push_str(" │");
    }
    result += &format!("\n╰{}╯", horizontal_border);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explore;

    #[test]
    fn renders_a_single_cell_board() {
        let config = BoardConfig::new(1, 1);
        let sequence = explore(config, Cell { row: 0, column: 0 }).unwrap();
        assert_eq!(
            visualize_tour(&config, &sequence),
            "╭───╮\n\
             │ 1 │\n\
             ╰───╯"
        );
    }

    #[test]
    fn renders_unvisited_cells_as_dots() {
        let config = BoardConfig::new(3, 3);
        let sequence = explore(config, Cell { row: 0, column: 0 }).unwrap();
        assert_eq!(
            visualize_tour(&config, &sequence),
            "╭───────╮\n\
             │ 1 6 3 │\n\
             │ 4 · 8 │\n\
             │ 7 2 5 │\n\
             ╰───────╯"
        );
    }

    #[test]
    fn renders_an_empty_sequence_as_all_dots() {
        let config = BoardConfig::new(2, 2);
        assert_eq!(
            visualize_tour(&config, &[]),
            "╭─────╮\n\
             │ · · │\n\
             │ · · │\n\
             ╰─────╯"
        );
    }
}
