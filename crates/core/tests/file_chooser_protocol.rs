//! Request/response protocol of `FileChooser.OpenFile`, driven without a bus.

use std::sync::Arc;

use portal::{FileChooserPortal, FilePickerConfig, PortalConfig, PortalContext, PortalError, RecordingEmitter};
use portald_protocol::{HANDLE_TOKEN, MULTIPLE, OptionError, Options, RequestResponse, ResponseCode};
use portald_runtime::{ScriptedInvoker, SystemInvoker};
use tokio::sync::mpsc::UnboundedReceiver;
use zvariant::Value;

struct Harness {
	portal: FileChooserPortal,
	invoker: Arc<ScriptedInvoker>,
	responses: UnboundedReceiver<RequestResponse>,
}

fn harness() -> Harness {
	let invoker = Arc::new(ScriptedInvoker::new());
	let (emitter, responses) = RecordingEmitter::new();
	let context = PortalContext::new(Arc::new(emitter), invoker.clone(), PortalConfig::default());
	Harness {
		portal: FileChooserPortal::new(Arc::new(context)),
		invoker,
		responses,
	}
}

fn options(entries: &[(&str, Value<'_>)]) -> Options {
	entries
		.iter()
		.map(|(key, value)| (key.to_string(), value.try_to_owned().unwrap()))
		.collect()
}

fn token(token: &str) -> Options {
	options(&[(HANDLE_TOKEN, Value::from(token))])
}

#[tokio::test]
async fn open_file_end_to_end() {
	let mut h = harness();
	h.invoker.push_stdout("/home/user/file.txt\n");

	let (path, task) = h.portal.start_open_file(":1.7", "", "Open File", &token("abc")).unwrap();
	assert_eq!(path.as_str(), "/org/freedesktop/portal/desktop/request/1_7/abc");

	task.await.unwrap();

	let response = h.responses.recv().await.unwrap();
	assert_eq!(response.path, path);
	assert_eq!(response.code, ResponseCode::Success);
	assert_eq!(response.results.uris, Some(vec!["file:///home/user/file.txt".to_string()]));
	assert!(h.responses.try_recv().is_err(), "exactly one response expected");
}

#[tokio::test]
async fn picker_is_invoked_with_title() {
	let mut h = harness();
	h.invoker.push_stdout("/tmp/x\n");

	let (_, task) = h.portal.start_open_file(":1.7", "x11:42", "Pick one", &token("t")).unwrap();
	task.await.unwrap();
	h.responses.recv().await.unwrap();

	let invocations = h.invoker.invocations();
	assert_eq!(invocations.len(), 1);
	assert_eq!(invocations[0].program, "zenity");
	assert_eq!(invocations[0].args, vec!["--file-selection", "--title=Pick one"]);
}

#[tokio::test]
async fn non_zero_exit_responds_with_failure() {
	let mut h = harness();
	h.invoker.push_exit(1);

	let (path, task) = h.portal.start_open_file(":1.9", "", "", &token("cancel")).unwrap();
	task.await.unwrap();

	let response = h.responses.recv().await.unwrap();
	assert_eq!(response.path, path);
	assert_eq!(response.code.as_u32(), 1);
	assert_eq!(response.results.uris, None);
	assert!(h.responses.try_recv().is_err());
}

#[tokio::test]
async fn missing_picker_responds_with_failure() {
	let mut h = harness();
	h.invoker.push_not_found();

	let (_, task) = h.portal.start_open_file(":1.9", "", "", &token("nf")).unwrap();
	task.await.unwrap();

	assert_eq!(h.responses.recv().await.unwrap().code, ResponseCode::Cancelled);
	assert!(h.responses.try_recv().is_err());
}

#[tokio::test]
async fn killed_picker_responds_with_failure() {
	let mut h = harness();
	h.invoker.push_killed();

	let (_, task) = h.portal.start_open_file(":1.9", "", "", &token("k")).unwrap();
	task.await.unwrap();

	assert_eq!(h.responses.recv().await.unwrap().code, ResponseCode::Cancelled);
}

#[tokio::test]
async fn empty_picker_output_still_succeeds() {
	let mut h = harness();
	h.invoker.push_stdout("");

	let (path, task) = h.portal.start_open_file(":1.7", "", "", &token("abc")).unwrap();
	task.await.unwrap();

	let response = h.responses.recv().await.unwrap();
	assert_eq!(response.path, path);
	assert_eq!(response.code, ResponseCode::Success);
	assert_eq!(response.results.uris, Some(vec!["file://".to_string()]));
	assert!(h.responses.try_recv().is_err());
}

#[tokio::test]
async fn multiple_selection_returns_every_path() {
	let mut h = harness();
	h.invoker.push_stdout("/a.txt\n/b.txt\n");

	let opts = options(&[(HANDLE_TOKEN, Value::from("m")), (MULTIPLE, Value::from(true))]);
	let (_, task) = h.portal.start_open_file(":1.3", "", "", &opts).unwrap();
	task.await.unwrap();

	let response = h.responses.recv().await.unwrap();
	assert_eq!(response.code, ResponseCode::Success);
	assert_eq!(
		response.results.uris,
		Some(vec!["file:///a.txt".to_string(), "file:///b.txt".to_string()])
	);
	assert!(h.invoker.invocations()[0].args.contains(&"--multiple".to_string()));
}

#[tokio::test]
async fn missing_handle_token_is_rejected_before_spawning() {
	let mut h = harness();

	let err = h.portal.start_open_file(":1.7", "", "", &Options::new()).unwrap_err();
	assert!(matches!(err, PortalError::Options(OptionError::Missing { .. })));

	let bus_error = zbus::fdo::Error::from(err);
	assert!(matches!(bus_error, zbus::fdo::Error::InvalidArgs(_)));

	tokio::task::yield_now().await;
	assert!(h.invoker.invocations().is_empty());
	assert!(h.responses.try_recv().is_err());
}

#[tokio::test]
async fn invalid_token_is_rejected() {
	let h = harness();
	let err = h.portal.start_open_file(":1.7", "", "", &token("a/b")).unwrap_err();
	assert!(matches!(err, PortalError::Options(OptionError::InvalidToken(_))));
}

#[tokio::test]
async fn wrong_option_type_is_rejected() {
	let h = harness();
	let opts = options(&[(HANDLE_TOKEN, Value::from("t")), (MULTIPLE, Value::from("yes"))]);
	let err = h.portal.start_open_file(":1.7", "", "", &opts).unwrap_err();
	assert!(matches!(err, PortalError::Options(OptionError::WrongType { .. })));
}

#[tokio::test]
async fn unsanitizable_sender_is_rejected() {
	let h = harness();
	let err = h.portal.start_open_file("org.example-app", "", "", &token("t")).unwrap_err();
	assert!(matches!(err, PortalError::Variant(_)));
}

#[tokio::test]
async fn concurrent_requests_each_get_one_response() {
	let mut h = harness();
	h.invoker.push_stdout("/first\n");
	h.invoker.push_stdout("/second\n");

	let (path_a, task_a) = h.portal.start_open_file(":1.7", "", "", &token("a")).unwrap();
	let (path_b, task_b) = h.portal.start_open_file(":1.8", "", "", &token("b")).unwrap();
	task_a.await.unwrap();
	task_b.await.unwrap();

	let mut responses = vec![h.responses.recv().await.unwrap(), h.responses.recv().await.unwrap()];
	assert!(h.responses.try_recv().is_err());

	responses.sort_by(|a, b| a.path.as_str().cmp(b.path.as_str()));
	assert_eq!(responses[0].path, path_a);
	assert_eq!(responses[1].path, path_b);

	let mut uris: Vec<String> = responses.into_iter().flat_map(|r| r.results.uris.unwrap_or_default()).collect();
	uris.sort();
	assert_eq!(uris, vec!["file:///first".to_string(), "file:///second".to_string()]);
}

#[tokio::test]
async fn failed_response_send_does_not_escalate() {
	let invoker = Arc::new(ScriptedInvoker::new());
	invoker.push_stdout("/tmp/file\n");
	let (emitter, mut responses) = RecordingEmitter::failing();
	let context = PortalContext::new(Arc::new(emitter), invoker, PortalConfig::default());
	let portal = FileChooserPortal::new(Arc::new(context));

	let (_, task) = portal.start_open_file(":1.7", "", "", &token("lost")).unwrap();
	task.await.unwrap();

	assert_eq!(responses.recv().await.unwrap().code, ResponseCode::Success);
	assert!(responses.try_recv().is_err());
}

#[cfg(unix)]
#[tokio::test]
async fn real_picker_process_is_used() {
	let config = PortalConfig {
		file_picker: FilePickerConfig {
			program: "sh".to_string(),
			args: vec!["-c".to_string(), "echo /home/user/file.txt".to_string()],
			title_flag: None,
			directory_flag: None,
			multiple_flags: Vec::new(),
		},
		..PortalConfig::default()
	};
	let (emitter, mut responses) = RecordingEmitter::new();
	let context = PortalContext::new(Arc::new(emitter), Arc::new(SystemInvoker), config);
	let portal = FileChooserPortal::new(Arc::new(context));

	let (path, task) = portal.start_open_file(":1.7", "", "Open", &token("abc")).unwrap();
	task.await.unwrap();

	let response = responses.recv().await.unwrap();
	assert_eq!(response.path, path);
	assert_eq!(response.code, ResponseCode::Success);
	assert_eq!(response.results.uris, Some(vec!["file:///home/user/file.txt".to_string()]));
}
