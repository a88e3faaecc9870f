/// Generate a sub-client method that builds one endpoint and sends it through the
/// dispatcher.
///
/// - `endpoint:` takes an expression evaluating to an `Endpoint`.
/// - `try_endpoint:` takes an expression evaluating to `Result<Endpoint, FmpError>`;
///   an `Err` is returned before any request is made.
///
/// Generated methods take `self` by value (sub-clients are `Copy`). Argument
/// expressions must not mention `self`.
macro_rules! fmp_endpoint {
    (
        $(#[$meta:meta])*
        method: $name:ident( $( $arg_ident:ident : $arg_ty:ty ),* $(,)? ),
        endpoint: $endpoint:expr $(,)?
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(target = "fmp::api", skip(self $(, $arg_ident)*))
        )]
        ///
        /// # Errors
        /// Returns an error if the transport fails, the service answers with a
        /// non-success status, or a JSON body does not parse.
        pub async fn $name(
            self,
            $( $arg_ident: $arg_ty ),*
        ) -> Result<fmp_core::Payload, fmp_types::FmpError> {
            self.fmp.send($endpoint).await
        }
    };
    (
        $(#[$meta:meta])*
        method: $name:ident( $( $arg_ident:ident : $arg_ty:ty ),* $(,)? ),
        try_endpoint: $endpoint:expr $(,)?
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(target = "fmp::api", skip(self $(, $arg_ident)*))
        )]
        ///
        /// # Errors
        /// Returns `InvalidArg` for a rejected parameter combination (no request is
        /// made), otherwise an error if the transport fails, the service answers with
        /// a non-success status, or a JSON body does not parse.
        pub async fn $name(
            self,
            $( $arg_ident: $arg_ty ),*
        ) -> Result<fmp_core::Payload, fmp_types::FmpError> {
            let endpoint: Result<fmp_core::Endpoint, fmp_types::FmpError> = $endpoint;
            self.fmp.send(endpoint?).await
        }
    };
}

pub(crate) use fmp_endpoint;
