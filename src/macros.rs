/// Declare a wrapper that turns a stage contract into a [`Plugin`](crate::Plugin)
/// with fixed stage membership and declared dependencies.
macro_rules! stage_bound_plugin {
    (
        $(#[$meta:meta])*
        $wrapper:ident<$contract:ident> => $method:ident,
        stages: [$($stage:ident),+ $(,)?],
        dependencies: [$($dep:literal),* $(,)?] $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $wrapper<T>(T);

        impl<T> $wrapper<T> {
            pub const STAGES: &'static [$crate::stage::Stage] = &[$($crate::stage::Stage::$stage),+];
            pub const DEPENDENCIES: &'static [&'static str] = &[$($dep),*];

            pub fn new(inner: T) -> Self {
                Self(inner)
            }

            pub fn inner(&self) -> &T {
                &self.0
            }

            pub fn into_inner(self) -> T {
                self.0
            }
        }

        #[async_trait::async_trait]
        impl<T: $contract + 'static> $crate::traits::Plugin for $wrapper<T> {
            fn name(&self) -> &str {
                self.0.name()
            }

            fn supported_stages(&self) -> &[$crate::stage::Stage] {
                Self::STAGES
            }

            fn dependencies(&self) -> &[&'static str] {
                Self::DEPENDENCIES
            }

            async fn execute(
                &self,
                context: &mut dyn $crate::context::ExecutionContext,
            ) -> $crate::error::PluginResult<String> {
                self.0.$method(context).await
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    };
}
