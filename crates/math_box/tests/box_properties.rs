//! Property tests for the box tree
//! Covers metric copying, child insertion order and last-font lookup over
//! arbitrary trees.

use math_box::{
    BoxError, BoxGroup, BoxNode, CharBox, DecorBox, Decoration, FontId, Metrics, StrutBox, TexBox,
};
use proptest::prelude::*;

fn metrics_strategy() -> impl Strategy<Value = Metrics> {
    (-50.0f32..50.0, -50.0f32..50.0, -50.0f32..50.0, -50.0f32..50.0).prop_map(
        |(width, height, depth, shift)| Metrics {
            width,
            height,
            depth,
            shift,
        },
    )
}

/// A leaf carrying a glyph from font 0..8, or an empty strut
fn leaf_strategy() -> impl Strategy<Value = TexBox> {
    prop_oneof![
        (0i32..8, metrics_strategy())
            .prop_map(|(font, m)| TexBox::from(CharBox::new('x', FontId::new(font), m))),
        metrics_strategy().prop_map(|m| TexBox::from(StrutBox::new(m))),
    ]
}

fn tree_strategy() -> impl Strategy<Value = TexBox> {
    leaf_strategy().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(|children| {
                let mut group = BoxGroup::horizontal(Metrics::zero());
                for child in children {
                    group.add(child);
                }
                TexBox::from(group)
            }),
            inner.prop_map(|base| TexBox::from(DecorBox::new(base, Decoration::Reflect))),
        ]
    })
}

/// Reference answer: font of the last glyph in paint order
fn last_glyph_font(tree: &TexBox) -> FontId {
    let mut last = FontId::NO_FONT;
    tree.walk(&mut |node, _| {
        if let TexBox::Char(c) = node {
            if !c.font_id().is_no_font() {
                last = c.font_id();
            }
        }
    });
    last
}

fn glyph(font: i32) -> TexBox {
    CharBox::new('g', FontId::new(font), Metrics::new(5.0, 7.0, 1.0)).into()
}

proptest! {
    #[test]
    fn copy_metrics_overwrites_all_four(a in tree_strategy(), b in tree_strategy()) {
        let mut target = a.clone();
        let source = b.clone();
        target.copy_metrics(&source);

        prop_assert_eq!(target.metrics(), b.metrics());
        prop_assert_eq!(&source, &b);
        prop_assert_eq!(target.children(), a.children());
    }

    #[test]
    fn append_preserves_order(children in prop::collection::vec(leaf_strategy(), 0..8), extra in leaf_strategy()) {
        let mut group = BoxGroup::horizontal(Metrics::zero());
        for child in &children {
            group.add(child.clone());
        }
        group.add(extra.clone());

        prop_assert_eq!(group.len(), children.len() + 1);
        prop_assert_eq!(&group.children()[..children.len()], &children[..]);
        prop_assert_eq!(&group.children()[children.len()], &extra);
    }

    #[test]
    fn insert_at_end_equals_append(children in prop::collection::vec(leaf_strategy(), 0..8), extra in leaf_strategy()) {
        let mut appended = BoxGroup::horizontal(Metrics::zero());
        let mut inserted = BoxGroup::horizontal(Metrics::zero());
        for child in &children {
            appended.add(child.clone());
            inserted.add(child.clone());
        }
        appended.add(extra.clone());
        inserted.insert(children.len(), extra).unwrap();

        prop_assert_eq!(appended, inserted);
    }

    #[test]
    fn insert_places_child_at_position(
        children in prop::collection::vec(leaf_strategy(), 0..8),
        extra in leaf_strategy(),
        seed in any::<usize>(),
    ) {
        let position = seed % (children.len() + 1);
        let mut group = BoxGroup::horizontal(Metrics::zero());
        for child in &children {
            group.add(child.clone());
        }
        group.insert(position, extra.clone()).unwrap();

        prop_assert_eq!(&group.children()[position], &extra);
        prop_assert_eq!(&group.children()[..position], &children[..position]);
        prop_assert_eq!(&group.children()[position + 1..], &children[position..]);
    }

    #[test]
    fn insert_past_end_fails_unmodified(
        children in prop::collection::vec(leaf_strategy(), 0..8),
        excess in 1usize..100,
    ) {
        let mut group = BoxGroup::horizontal(Metrics::zero());
        for child in &children {
            group.add(child.clone());
        }
        let before = group.clone();
        let position = children.len() + excess;

        let result = group.insert(position, glyph(1));
        let rejected = matches!(result, Err(BoxError::IndexOutOfRange { .. }));
        prop_assert!(rejected);
        prop_assert_eq!(group, before);
    }

    #[test]
    fn last_font_id_is_last_glyph_font(tree in tree_strategy()) {
        prop_assert_eq!(tree.last_font_id(), last_glyph_font(&tree));
    }

    #[test]
    fn last_font_id_is_idempotent(tree in tree_strategy()) {
        let first = tree.last_font_id();
        prop_assert_eq!(tree.last_font_id(), first);
    }

    #[test]
    fn decor_matches_base(tree in tree_strategy()) {
        let expected = tree.last_font_id();
        let decor = DecorBox::new(tree, Decoration::Strike { thickness: 0.4 });
        prop_assert_eq!(decor.last_font_id(), expected);
    }
}

#[test]
fn first_real_font_from_the_end_wins() {
    // From last to first: [sentinel, sentinel, X=3, Y=9]
    let group = BoxGroup::horizontal(Metrics::zero())
        .with_child(glyph(9))
        .with_child(glyph(3))
        .with_child(StrutBox::space(1.0))
        .with_child(glyph(-1));
    assert_eq!(group.last_font_id(), FontId::new(3));
}

#[test]
fn trailing_sentinel_leaf_is_skipped() {
    let group = BoxGroup::horizontal(Metrics::zero())
        .with_child(glyph(5))
        .with_child(glyph(-1));
    assert_eq!(group.last_font_id(), FontId::new(5));
}

#[test]
fn nested_group_then_decor() {
    let inner = BoxGroup::horizontal(Metrics::zero()).with_child(glyph(3));
    let outer = BoxGroup::horizontal(Metrics::zero())
        .with_child(inner)
        .with_child(DecorBox::new(glyph(7), Decoration::Reflect));
    assert_eq!(outer.last_font_id(), FontId::new(7));
}

#[test]
fn empty_and_glyphless_groups_have_no_font() {
    assert!(BoxGroup::horizontal(Metrics::zero()).last_font_id().is_no_font());

    let spaces = BoxGroup::horizontal(Metrics::zero())
        .with_child(StrutBox::space(1.0))
        .with_child(StrutBox::empty());
    assert!(spaces.last_font_id().is_no_font());
}
