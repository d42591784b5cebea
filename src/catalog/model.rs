use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

/// A media item, or a container group of media items.
///
/// Descriptive fields are fixed at construction. The only mutation is
/// appending to the owned child list. The parent link is weak: ownership
/// flows strictly from parent to child.
#[derive(Debug)]
pub struct MediaItem {
    title: String,
    subtitle: String,
    studio: String,
    url: Option<String>,
    image_url: Option<String>,
    poster_url: Option<String>,
    duration: u64,
    container: bool,
    items: RefCell<Vec<Rc<MediaItem>>>,
    parent: Weak<MediaItem>,
}

impl MediaItem {
    /// Create a new item with an empty child list.
    ///
    /// No validation is performed: empty strings and absent locators are
    /// accepted as given. Passing a `parent` only records the back-reference;
    /// use [`MediaItem::append_child`] to attach the item to it.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        studio: impl Into<String>,
        url: Option<String>,
        image_url: Option<String>,
        poster_url: Option<String>,
        duration: u64,
        parent: Option<&Rc<MediaItem>>,
    ) -> Rc<Self> {
        Rc::new(Self {
            title: title.into(),
            subtitle: subtitle.into(),
            studio: studio.into(),
            url,
            image_url,
            poster_url,
            duration,
            container: false,
            items: RefCell::new(Vec::new()),
            parent: parent.map(Rc::downgrade).unwrap_or_default(),
        })
    }

    /// Create a container item: no playback url, no poster, zero duration.
    ///
    /// A container counts as a group even while it has no children.
    pub fn group(
        title: impl Into<String>,
        image_url: Option<String>,
        parent: Option<&Rc<MediaItem>>,
    ) -> Rc<Self> {
        Rc::new(Self {
            title: title.into(),
            subtitle: String::new(),
            studio: String::new(),
            url: None,
            image_url,
            poster_url: None,
            duration: 0,
            container: true,
            items: RefCell::new(Vec::new()),
            parent: parent.map(Rc::downgrade).unwrap_or_default(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn studio(&self) -> &str {
        &self.studio
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn poster_url(&self) -> Option<&str> {
        self.poster_url.as_deref()
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Snapshot of the child items in display order. Empty for leaf items.
    ///
    /// Later appends are not reflected in a snapshot already taken.
    pub fn items(&self) -> Vec<Rc<MediaItem>> {
        self.items.borrow().clone()
    }

    /// The owning item, or `None` for the root (or once the owner is gone).
    pub fn parent(&self) -> Option<Rc<MediaItem>> {
        self.parent.upgrade()
    }

    pub fn child_count(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Built with [`MediaItem::group`], or holding at least one child.
    pub fn is_group(&self) -> bool {
        self.container || self.child_count() > 0
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_group()
    }

    /// Append `child` to the end of this item's children.
    ///
    /// The child must have been constructed with `self` as its parent.
    /// Appending `self`, one of its ancestors, or an item that names another
    /// parent is refused and returns `false`; the child list is unchanged.
    pub fn append_child(&self, child: Rc<MediaItem>) -> bool {
        let is_self_or_ancestor = std::ptr::eq(Rc::as_ptr(&child), self)
            || self.ancestors().any(|a| Rc::ptr_eq(&a, &child));
        if is_self_or_ancestor {
            warn!(
                parent = %self.title,
                child = %child.title,
                "refusing to append an item beneath itself"
            );
            return false;
        }

        let names_self = child
            .parent()
            .is_some_and(|p| std::ptr::eq(Rc::as_ptr(&p), self));
        if !names_self {
            warn!(
                parent = %self.title,
                child = %child.title,
                "refusing to append child whose parent link points elsewhere"
            );
            return false;
        }

        let mut items = self.items.borrow_mut();
        items.push(child);
        debug!(parent = %self.title, count = items.len(), "appended child");
        true
    }

    /// Construct a child whose parent is `self` and append it in one step.
    #[allow(clippy::too_many_arguments)]
    pub fn add_child(
        self: &Rc<Self>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        studio: impl Into<String>,
        url: Option<String>,
        image_url: Option<String>,
        poster_url: Option<String>,
        duration: u64,
    ) -> Rc<MediaItem> {
        let child = Self::new(
            title,
            subtitle,
            studio,
            url,
            image_url,
            poster_url,
            duration,
            Some(self),
        );
        self.append_child(Rc::clone(&child));
        child
    }

    /// Construct a group whose parent is `self` and append it.
    pub fn add_group(
        self: &Rc<Self>,
        title: impl Into<String>,
        image_url: Option<String>,
    ) -> Rc<MediaItem> {
        let group = Self::group(title, image_url, Some(self));
        self.append_child(Rc::clone(&group));
        group
    }
}
