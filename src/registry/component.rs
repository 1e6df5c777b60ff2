//! The `Component` trait and the constructor plumbing shared by every factory.

use std::any::Any;
use std::sync::Arc;

use super::{InterfaceId, Status, ISUPPORTS};

/// Erases a concrete component to `Any`, for downcasting.
pub trait AsAny: Any {
    /// `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An object a factory can hand out.
pub trait Component: AsAny + Send + Sync {
    /// Concrete class name, for diagnostics.
    fn class_name(&self) -> &'static str;

    /// Interfaces implemented besides [`ISUPPORTS`].
    fn interfaces(&self) -> &'static [InterfaceId];

    /// Checks whether the component answers to `iid`.
    ///
    /// # Errors
    /// [`Status::NoInterface`] if it does not.
    fn query_interface(&self, iid: &InterfaceId) -> Result<(), Status> {
        if *iid == ISUPPORTS || self.interfaces().contains(iid) {
            Ok(())
        } else {
            Err(Status::NoInterface)
        }
    }
}

impl dyn Component {
    /// Downcasts to the concrete component type.
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// `true` if the concrete type is `T`.
    pub fn is<T: Component>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Signature of every factory constructor.
///
/// `outer` is the aggregating object, if any; `iid` is the interface the
/// caller wants. On success the new component is returned.
pub type Constructor =
    fn(outer: Option<&dyn Component>, iid: &InterfaceId) -> Result<Arc<dyn Component>, Status>;

/// Common body of generated constructors.
///
/// Aggregation is refused before `build` runs; the built component must then
/// answer to `iid`.
///
/// # Errors
/// [`Status::NoAggregation`], any error from `build`, or [`Status::NoInterface`].
pub fn construct_component<C, F>(
    outer: Option<&dyn Component>,
    iid: &InterfaceId,
    build: F,
) -> Result<Arc<dyn Component>, Status>
where
    C: Component,
    F: FnOnce() -> Result<C, Status>,
{
    if outer.is_some() {
        return Err(Status::NoAggregation);
    }
    let component = build()?;
    component.query_interface(iid)?;
    Ok(Arc::new(component))
}

/// Hands out an already-existing component for `iid`.
///
/// # Errors
/// [`Status::NoAggregation`] or [`Status::NoInterface`].
pub fn query_existing(
    outer: Option<&dyn Component>,
    iid: &InterfaceId,
    component: Arc<dyn Component>,
) -> Result<Arc<dyn Component>, Status> {
    if outer.is_some() {
        return Err(Status::NoAggregation);
    }
    component.query_interface(iid)?;
    Ok(component)
}

/// Defines a [`Constructor`] for a `Default`-constructible component.
///
/// With a trailing method name, that method (`fn(&mut self) -> Result<(), Status>`)
/// runs after construction and its failure is returned instead of the object.
///
/// ```rust
/// use widgetry::generic_factory_constructor;
/// use widgetry::registry::{Component, InterfaceId, Status};
///
/// const NS_IFOO: InterfaceId = InterfaceId::new("nsIFoo");
///
/// #[derive(Default)]
/// struct Foo {
///     ready: bool,
/// }
///
/// impl Foo {
///     fn init(&mut self) -> Result<(), Status> {
///         self.ready = true;
///         Ok(())
///     }
/// }
///
/// impl Component for Foo {
///     fn class_name(&self) -> &'static str { "Foo" }
///     fn interfaces(&self) -> &'static [InterfaceId] { &[NS_IFOO] }
/// }
///
/// generic_factory_constructor!(foo_constructor = Foo, init);
///
/// let foo = foo_constructor(None, &NS_IFOO).unwrap();
/// assert!(foo.downcast_ref::<Foo>().unwrap().ready);
/// ```
#[macro_export]
macro_rules! generic_factory_constructor {
    ($vis:vis $name:ident = $ty:ty) => {
        #[doc = concat!("Factory for [`", stringify!($ty), "`].")]
        $vis fn $name(
            outer: ::core::option::Option<&dyn $crate::registry::Component>,
            iid: &$crate::registry::InterfaceId,
        ) -> ::core::result::Result<
            ::std::sync::Arc<dyn $crate::registry::Component>,
            $crate::registry::Status,
        > {
            $crate::registry::construct_component(outer, iid, || {
                ::core::result::Result::Ok(<$ty as ::core::default::Default>::default())
            })
        }
    };
    ($vis:vis $name:ident = $ty:ty, $init:ident) => {
        #[doc = concat!("Factory for [`", stringify!($ty), "`].")]
        $vis fn $name(
            outer: ::core::option::Option<&dyn $crate::registry::Component>,
            iid: &$crate::registry::InterfaceId,
        ) -> ::core::result::Result<
            ::std::sync::Arc<dyn $crate::registry::Component>,
            $crate::registry::Status,
        > {
            $crate::registry::construct_component(outer, iid, || {
                let mut component = <$ty as ::core::default::Default>::default();
                component.$init()?;
                ::core::result::Result::Ok(component)
            })
        }
    };
}
