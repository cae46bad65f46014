//! Scene registration.
//!
//! A [`Scene`] is the declarative drawable tree a host builds for one commit.
//! [`Scene::register`] walks it depth first and produces a [`DrawList`]: a
//! flat sequence of draw commands in declaration order, with each style
//! scope bracketed by a push and a matching pop. The list borrows the scene
//! and is rebuilt every commit; it is never kept between commits.

use crate::{CoordinateSystem, Draw, DrawSurface, Drawable, StyleOverrides, StyleStack};
use plotter_core::profiling::profile_scope;

/// The declarative drawable tree of one commit.
///
/// Root order is paint order: the last drawable is drawn on top.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    roots: Vec<Drawable>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a root drawable.
    pub fn with(mut self, drawable: impl Into<Drawable>) -> Self {
        self.roots.push(drawable.into());
        self
    }

    /// Append a root drawable in place.
    pub fn push(&mut self, drawable: impl Into<Drawable>) {
        self.roots.push(drawable.into());
    }

    /// Append several root drawables.
    pub fn extend<I, D>(&mut self, drawables: I)
    where
        I: IntoIterator<Item = D>,
        D: Into<Drawable>,
    {
        self.roots.extend(drawables.into_iter().map(Into::into));
    }

    pub fn roots(&self) -> &[Drawable] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Flatten the tree into a fresh draw list.
    pub fn register(&self) -> DrawList<'_> {
        profile_scope!("scene_register");

        let mut commands = Vec::with_capacity(self.roots.len());
        let mut stack = StyleStack::new();
        let mut max_depth = 0;
        register_into(&self.roots, &mut commands, &mut stack, &mut max_depth);
        debug_assert_eq!(stack.depth(), 0, "style stack left unbalanced");

        DrawList {
            commands,
            max_depth,
        }
    }
}

impl<D: Into<Drawable>> FromIterator<D> for Scene {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        let mut scene = Scene::new();
        scene.extend(iter);
        scene
    }
}

fn register_into<'a>(
    nodes: &'a [Drawable],
    commands: &mut Vec<DrawCommand<'a>>,
    stack: &mut StyleStack,
    max_depth: &mut usize,
) {
    for node in nodes {
        match node {
            Drawable::StyleScope(scope) => {
                commands.push(DrawCommand::PushStyle(&scope.style));
                stack.push(&scope.style);
                *max_depth = (*max_depth).max(stack.depth());

                register_into(&scope.children, commands, stack, max_depth);

                stack.pop();
                commands.push(DrawCommand::PopStyle);
            }
            drawable => commands.push(DrawCommand::Draw {
                drawable,
                style: stack.effective(),
                depth: stack.depth(),
            }),
        }
    }
}

/// One entry of a [`DrawList`].
#[derive(Debug, Clone)]
pub enum DrawCommand<'a> {
    /// Save the surface state and apply a scope's overrides.
    PushStyle(&'a StyleOverrides),
    /// Draw a leaf drawable.
    Draw {
        drawable: &'a Drawable,
        /// Combined overrides of the enclosing scopes.
        style: StyleOverrides,
        /// Number of enclosing scopes.
        depth: usize,
    },
    /// Restore the state saved by the matching `PushStyle`.
    PopStyle,
}

/// Counters reported by [`DrawList::execute`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Leaf drawables drawn.
    pub drawables: usize,
    /// Style scopes entered.
    pub style_scopes: usize,
}

/// A flat, ordered, style-scoped list of draw commands.
#[derive(Debug, Clone)]
pub struct DrawList<'a> {
    commands: Vec<DrawCommand<'a>>,
    max_depth: usize,
}

impl<'a> DrawList<'a> {
    pub fn commands(&self) -> &[DrawCommand<'a>] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Deepest style scope nesting in the list.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Leaf drawables in paint order.
    pub fn drawables(&self) -> impl Iterator<Item = &'a Drawable> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Draw { drawable, .. } => Some(*drawable),
            _ => None,
        })
    }

    /// Run every command against `surface`.
    ///
    /// Each `PushStyle` saves the surface state and each `PopStyle` restores
    /// it; registration emits them in matched pairs, so the surface leaves
    /// this call with the same state stack it entered with.
    pub fn execute(
        &self,
        surface: &mut dyn DrawSurface,
        cs: &CoordinateSystem,
        width: f64,
        height: f64,
    ) -> DrawStats {
        profile_scope!("draw_list_execute");

        let mut stats = DrawStats::default();
        for command in &self.commands {
            match command {
                DrawCommand::PushStyle(style) => {
                    surface.save();
                    style.apply(surface);
                    stats.style_scopes += 1;
                }
                DrawCommand::Draw { drawable, .. } => {
                    drawable.draw(surface, cs, width, height);
                    stats.drawables += 1;
                }
                DrawCommand::PopStyle => surface.restore(),
            }
        }
        stats
    }
}
