//! Layout engine: coordinates for already-assigned members
//!
//! Layouts only read generations and ids. They never touch relation sets,
//! and the same member slice always yields the same coordinates.

use crate::config::{GraphConfig, LayoutMode};
use stamtavla_domain::{is_subject, Member};
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// A position on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

/// A positioning strategy
pub trait Layout {
    /// Compute one position per member, in the same order as `members`
    fn positions(&self, members: &[Member]) -> Vec<Point>;
}

/// Rows by generation, centered on a shared midpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandedGrid {
    /// Distance between neighbours in a row
    pub horizontal_spacing: f64,
    /// Distance between rows
    pub vertical_spacing: f64,
}

impl Layout for BandedGrid {
    fn positions(&self, members: &[Member]) -> Vec<Point> {
        let mut rows: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        for (i, member) in members.iter().enumerate() {
            rows.entry(member.generation).or_default().push(i);
        }

        let midpoint = members.len() as f64 * self.horizontal_spacing / 2.0;
        let mut points = vec![Point { x: 0.0, y: 0.0 }; members.len()];

        for (generation, row) in &rows {
            let start = midpoint - row.len() as f64 * self.horizontal_spacing / 2.0;
            let y = *generation as f64 * self.vertical_spacing;
            for (slot, &i) in row.iter().enumerate() {
                points[i] = Point {
                    x: start + slot as f64 * self.horizontal_spacing,
                    y,
                };
            }
        }

        points
    }
}

/// The writer at the center, everyone else evenly on one circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteredRadial {
    /// Canvas center, where the writer goes
    pub center: Point,
    /// Circle radius
    pub radius: f64,
}

impl Layout for CenteredRadial {
    fn positions(&self, members: &[Member]) -> Vec<Point> {
        let count = members.iter().filter(|m| !is_subject(&m.name)).count();

        let mut index = 0;
        members
            .iter()
            .map(|member| {
                if is_subject(&member.name) {
                    return self.center;
                }
                let angle = 2.0 * PI * index as f64 / count as f64;
                index += 1;
                Point {
                    x: self.center.x + self.radius * angle.cos(),
                    y: self.center.y + self.radius * angle.sin(),
                }
            })
            .collect()
    }
}

/// Build the layout named by `mode` with the configured geometry
pub fn layout_for(mode: LayoutMode, config: &GraphConfig) -> Box<dyn Layout> {
    match mode {
        LayoutMode::Grid => Box::new(BandedGrid {
            horizontal_spacing: config.horizontal_spacing,
            vertical_spacing: config.vertical_spacing,
        }),
        LayoutMode::Radial => Box::new(CenteredRadial {
            center: Point {
                x: config.center_x,
                y: config.center_y,
            },
            radius: config.radial_radius,
        }),
    }
}

/// Write a layout's positions into the members
pub fn apply_layout(layout: &dyn Layout, members: &mut [Member]) {
    let points = layout.positions(members);
    for (member, point) in members.iter_mut().zip(points) {
        member.x = point.x;
        member.y = point.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stamtavla_domain::{member_id, MemberId};

    fn member(name: &str, generation: i32) -> Member {
        let mut m = Member::new(member_id(name), name);
        m.generation = generation;
        m
    }

    const GRID: BandedGrid = BandedGrid {
        horizontal_spacing: 200.0,
        vertical_spacing: 150.0,
    };

    #[test]
    fn test_grid_rows_by_generation() {
        let members = vec![member("a", 0), member("b", 1), member("c", 1)];
        let points = GRID.positions(&members);

        // midpoint = 3 * 200 / 2 = 300
        assert_eq!(points[0], Point { x: 200.0, y: 0.0 });
        assert_eq!(points[1], Point { x: 100.0, y: 150.0 });
        assert_eq!(points[2], Point { x: 300.0, y: 150.0 });
    }

    #[test]
    fn test_grid_rows_share_a_midpoint() {
        let members = vec![member("a", 0), member("b", 1), member("c", 1), member("d", 2)];
        let points = GRID.positions(&members);
        let row_center = |xs: &[f64]| (xs[0] + xs[xs.len() - 1]) / 2.0;
        let top = row_center(&[points[0].x]);
        let middle = row_center(&[points[1].x, points[2].x]);
        assert_eq!(top, middle);
    }

    #[test]
    fn test_radial_subject_at_center() {
        let members = vec![member("Erik", 1), member("jag", 0), member("Anna", 0)];
        let radial = CenteredRadial {
            center: Point { x: 400.0, y: 300.0 },
            radius: 200.0,
        };
        let points = radial.positions(&members);

        assert_eq!(points[1], Point { x: 400.0, y: 300.0 });
        // Erik: index 0 of 2, angle 0
        assert!((points[0].x - 600.0).abs() < 1e-9);
        assert!((points[0].y - 300.0).abs() < 1e-9);
        // Anna: index 1 of 2, angle PI
        assert!((points[2].x - 200.0).abs() < 1e-9);
        assert!((points[2].y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_radial_recognizes_subject_label() {
        let members = vec![member("Anna", 0), member(stamtavla_domain::SUBJECT_LABEL, 1)];
        let radial = CenteredRadial {
            center: Point { x: 5.0, y: 5.0 },
            radius: 1.0,
        };
        let points = radial.positions(&members);
        assert_eq!(points[1], Point { x: 5.0, y: 5.0 });
        assert_eq!(points[0], Point { x: 6.0, y: 5.0 });
    }

    #[test]
    fn test_radial_without_subject() {
        let members = vec![member("a", 0)];
        let radial = CenteredRadial {
            center: Point { x: 0.0, y: 0.0 },
            radius: 10.0,
        };
        assert_eq!(radial.positions(&members), vec![Point { x: 10.0, y: 0.0 }]);
    }

    #[test]
    fn test_layouts_are_deterministic() {
        let config = GraphConfig::default();
        let mut members = vec![member("jag", 0), member("b", 1), member("c", 1), member("d", 2)];
        for mode in [LayoutMode::Grid, LayoutMode::Radial] {
            let layout = layout_for(mode, &config);
            apply_layout(layout.as_ref(), &mut members);
            let first: Vec<(f64, f64)> = members.iter().map(|m| (m.x, m.y)).collect();
            apply_layout(layout.as_ref(), &mut members);
            let second: Vec<(f64, f64)> = members.iter().map(|m| (m.x, m.y)).collect();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_layout_leaves_topology_alone() {
        let mut members = vec![member("a", 0), member("b", 1)];
        members[0].add_child(MemberId::new("b"));
        members[1].add_parent(MemberId::new("a"));
        let before = members.clone();
        apply_layout(&GRID, &mut members);
        for (b, a) in before.iter().zip(&members) {
            assert_eq!(b.parents, a.parents);
            assert_eq!(b.children, a.children);
            assert_eq!(b.generation, a.generation);
        }
    }
}
