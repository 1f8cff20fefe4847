//! 值是否"有意义"
//!
//! 包装器在 `meaningful` 开启时，把 [`Presence::is_absent`] 为真的成功值当作失败。
//!
//! 常见标准库类型、元组（至 12 元）与数组均已实现。自定义类型只需一行即可被包装：
//!
//! ```rust
//! use maybe_core::Presence;
//!
//! struct User {
//!     id: u32,
//! }
//!
//! impl Presence for User {}
//! ```

/// 判断成功值是否为空
pub trait Presence {
    /// 是否为空值
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T> Presence for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl Presence for () {
    fn is_absent(&self) -> bool {
        true
    }
}

impl Presence for serde_json::Value {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Presence + ?Sized> Presence for Box<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Presence + ?Sized> Presence for std::sync::Arc<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

macro_rules! impl_present {
    ($($ty:ty),* $(,)?) => {
        $(impl Presence for $ty {})*
    };
}

impl_present!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    str, String,
);

impl<T: Presence + ?Sized> Presence for std::rc::Rc<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<B: ToOwned + ?Sized> Presence for std::borrow::Cow<'_, B> {}
impl<T, E> Presence for Result<T, E> {}
impl<T, const N: usize> Presence for [T; N] {}
impl<T: ?Sized> Presence for std::sync::Mutex<T> {}
impl<T: ?Sized> Presence for std::sync::RwLock<T> {}
impl<T: ?Sized> Presence for std::cell::RefCell<T> {}

impl_present!(
    std::path::PathBuf,
    std::path::Path,
    std::ffi::OsString,
    std::ffi::OsStr,
    std::fs::File,
    std::fs::Metadata,
    std::fs::DirEntry,
    std::fs::ReadDir,
    std::net::IpAddr,
    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::SocketAddr,
    std::net::TcpStream,
    std::net::TcpListener,
    std::net::UdpSocket,
    std::time::Duration,
    std::time::Instant,
    std::time::SystemTime,
    std::process::Output,
    std::process::ExitStatus,
    std::num::NonZeroU32,
    std::num::NonZeroU64,
    std::num::NonZeroUsize,
);

macro_rules! impl_present_tuple {
    ($($name:ident)+) => {
        impl<$($name),+> Presence for ($($name,)+) {}
    };
}

impl_present_tuple!(A);
impl_present_tuple!(A B);
impl_present_tuple!(A B C);
impl_present_tuple!(A B C D);
impl_present_tuple!(A B C D E);
impl_present_tuple!(A B C D E F);
impl_present_tuple!(A B C D E F G);
impl_present_tuple!(A B C D E F G H);
impl_present_tuple!(A B C D E F G H I);
impl_present_tuple!(A B C D E F G H I J);
impl_present_tuple!(A B C D E F G H I J K);
impl_present_tuple!(A B C D E F G H I J K L);

impl<T> Presence for Vec<T> {}
impl<T> Presence for [T] {}
impl<K, V, S> Presence for std::collections::HashMap<K, V, S> {}
impl<K, V> Presence for std::collections::BTreeMap<K, V> {}
impl<T, S> Presence for std::collections::HashSet<T, S> {}
impl<T> Presence for std::collections::BTreeSet<T> {}
impl<T> Presence for std::collections::VecDeque<T> {}
