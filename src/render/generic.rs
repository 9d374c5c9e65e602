use crate::{
    foundation::core::Rect,
    grid::DataMap,
    render::{Paint, clipped_cells},
    scan::scanner::{ScanRow, Scanner},
};

/// Fill `floor(min)..=ceil(max)` of every row through `set`.
pub(crate) fn solid<M>(map: &mut M, scanner: &Scanner, clip: Rect, paint: &Paint<'_, M::Cell>)
where
    M: DataMap + ?Sized,
{
    for (y, row) in scanner.rows() {
        if let Some((x0, x1)) = clipped_cells(row, clip) {
            write_span(map, y, x0, x1, paint);
        }
    }
}

/// Paint the left and right silhouette of every row through `set`.
pub(crate) fn outline<M>(map: &mut M, scanner: &Scanner, clip: Rect, paint: &Paint<'_, M::Cell>)
where
    M: DataMap + ?Sized,
{
    for (y, row) in scanner.rows() {
        for (x0, x1) in outline_spans(row, scanner.above(y), scanner.below(y))
            .into_iter()
            .flatten()
        {
            let (x0, x1) = (x0.max(clip.min.x), x1.min(clip.max.x));
            if x0 <= x1 {
                write_span(map, y, x0, x1, paint);
            }
        }
    }
}

/// Cell runs forming the silhouette of `row`.
///
/// Each edge is placed half way to the neighboring rows; the cells it crosses between the
/// half-way points form that side's run. Rows without a neighbor on either side are endpoints
/// and paint their whole extent. Overlapping or touching runs merge into one.
pub(crate) fn outline_spans(
    row: ScanRow,
    above: Option<ScanRow>,
    below: Option<ScanRow>,
) -> [Option<(i32, i32)>; 2] {
    let (Some(above), Some(below)) = (above, below) else {
        return [row.cell_span(), None];
    };
    let (top, bottom) = (row.midpoint(above), row.midpoint(below));

    let lefts = [top.min, bottom.min, row.min];
    let rights = [top.max, bottom.max, row.max];
    let left = (
        fold(lefts, f32::min).floor() as i32,
        fold(lefts, f32::max).floor() as i32,
    );
    let right = (
        fold(rights, f32::min).ceil() as i32,
        fold(rights, f32::max).ceil() as i32,
    );

    if left.1 + 1 >= right.0 {
        [Some((left.0, right.1.max(left.1))), None]
    } else {
        [Some(left), Some(right)]
    }
}

fn fold(v: [f32; 3], f: fn(f32, f32) -> f32) -> f32 {
    f(f(v[0], v[1]), v[2])
}

fn write_span<M>(map: &mut M, y: i32, x0: i32, x1: i32, paint: &Paint<'_, M::Cell>)
where
    M: DataMap + ?Sized,
{
    match paint {
        Paint::Constant(v) => {
            for x in x0..=x1 {
                map.set(x, y, *v);
            }
        }
        Paint::Copy { .. } => {
            for x in x0..=x1 {
                match paint.sample(x, y) {
                    Some(v) => map.set(x, y, v),
                    None => return,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/generic.rs"]
mod tests;
