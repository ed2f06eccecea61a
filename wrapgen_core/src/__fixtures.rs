//! Shared spec-text fixtures for scanner and generator tests.

/// A spec exercising every block kind: includes with the module export,
/// defines, typed and untyped constants, a forwarding function, and nested
/// namespaces with an inline level.
pub fn sockets_spec() -> &'static str {
	concat!(
		"// POSIX socket symbols re-exported for the module build.\n",
		"includes\n",
		"    sys/socket.h\n",
		"    netinet/in.h\n",
		"\n",
		"defines\n",
		"    NO_DEPRECATED_SOCKETS\n",
		"\n",
		"constants\n",
		"    SOMAXCONN\n",
		"    INVALID_SOCKET:int\n",
		"\n",
		"functions\n",
		"    int closeSocket(int fd) -> return close(fd)\n",
		"\n",
		"ns net\n",
		"    ns:inline v1\n",
		"        Socket\n",
		"    acceptClient\n",
	)
}

/// The module source generated from [`sockets_spec`] under the name
/// `sockets`.
pub fn sockets_expected() -> &'static str {
	concat!(
		"module;\n",
		"#include <sys/socket.h>\n",
		"#include <netinet/in.h>\n",
		"export module external.sockets;\n",
		"#define NO_DEPRECATED_SOCKETS\n",
		"constexpr auto tmp_SOMAXCONN = SOMAXCONN;\n",
		"#undef SOMAXCONN\n",
		"export constexpr auto SOMAXCONN = tmp_SOMAXCONN;\n",
		"int tmp_INVALID_SOCKET = INVALID_SOCKET;\n",
		"#undef INVALID_SOCKET\n",
		"export int INVALID_SOCKET = tmp_INVALID_SOCKET;\n",
		"export int closeSocket(int fd) { return close(fd); }\n",
		"export namespace net {\n",
		"    inline namespace v1 {\n",
		"        using net::v1::Socket;\n",
		"    }\n",
		"    using net::acceptClient;\n",
		"}\n",
	)
}

/// A minimal spec regenerated by driver tests.
pub fn minimal_spec() -> &'static str {
	"includes\n    cstdint.h\nconstants\n    EOF_MARKER\n"
}
