macro_rules! nutype_string {
    ($ident:ident) => {
        $crate::macros::nutype_string!($ident());
    };
    ($ident:ident ( $($args:tt)* )) => {
        #[::nutype::nutype(
            $($args)*
            derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;
