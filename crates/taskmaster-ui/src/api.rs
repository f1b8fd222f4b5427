use gloo::net::http::{
  Request,
  RequestBuilder,
  Response
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use taskmaster_core::{
  ApiError,
  ClientConfig,
  TaskApi
};
use taskmaster_shared::{
  HealthDto,
  TaskDto,
  TaskId,
  TaskPayload
};
use tracing::{
  debug,
  error,
  warn
};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str =
  "X-Request-Id";

/// `fetch`-backed [`TaskApi`]. Every non-2xx answer is a failure,
/// whatever the code.
pub struct HttpTaskApi {
  config: ClientConfig
}

impl HttpTaskApi {
  pub fn new(config: ClientConfig) -> Self {
    Self {
      config
    }
  }
}

fn tagged(
  builder: RequestBuilder
) -> (RequestBuilder, String) {
  let request_id =
    Uuid::new_v4().to_string();
  (
    builder.header(
      REQUEST_ID_HEADER,
      &request_id
    ),
    request_id
  )
}

fn build(
  builder: RequestBuilder
) -> Result<Request, ApiError> {
  builder
    .build()
    .map_err(|err| {
      ApiError::Encode(err.to_string())
    })
}

fn build_json<T>(
  builder: RequestBuilder,
  body: &T
) -> Result<Request, ApiError>
where
  T: Serialize + ?Sized
{
  builder.json(body).map_err(|err| {
    ApiError::Encode(err.to_string())
  })
}

async fn dispatch(
  request: Request,
  request_id: &str
) -> Result<Response, ApiError> {
  let method = request.method();
  let url = request.url();
  debug!(%request_id, %method, %url, "sending request");

  let response =
    request.send().await.map_err(|err| {
      error!(%request_id, %url, error = %err, "request failed to send");
      ApiError::Network(err.to_string())
    })?;

  if !response.ok() {
    let status = response.status();
    let body = response
      .text()
      .await
      .unwrap_or_default();
    warn!(%request_id, %url, status, "backend rejected request");
    return Err(ApiError::from_status(
      status, &body
    ));
  }

  debug!(%request_id, status = response.status(), "request succeeded");
  Ok(response)
}

async fn decode<T>(
  response: Response
) -> Result<T, ApiError>
where
  T: DeserializeOwned
{
  response.json::<T>().await.map_err(
    |err| ApiError::Decode(err.to_string())
  )
}

impl TaskApi for HttpTaskApi {
  async fn list_tasks(
    &self
  ) -> Result<Vec<TaskDto>, ApiError> {
    let (builder, request_id) = tagged(
      Request::get(&self.config.tasks_url())
    );
    let response =
      dispatch(build(builder)?, &request_id)
        .await?;
    let items: Vec<serde_json::Value> =
      decode(response).await?;
    let received = items.len();
    let tasks = TaskDto::decode_list(items);
    if tasks.len() != received {
      warn!(
        %request_id,
        received,
        kept = tasks.len(),
        "dropped malformed task records"
      );
    }
    Ok(tasks)
  }

  async fn create_task(
    &self,
    payload: &TaskPayload
  ) -> Result<TaskDto, ApiError> {
    let (builder, request_id) = tagged(
      Request::post(
        &self.config.tasks_url()
      )
    );
    let request =
      build_json(builder, payload)?;
    let response =
      dispatch(request, &request_id).await?;
    decode(response).await
  }

  async fn update_task(
    &self,
    id: &TaskId,
    payload: &TaskPayload
  ) -> Result<TaskDto, ApiError> {
    let (builder, request_id) = tagged(
      Request::put(
        &self.config.task_url(id)
      )
    );
    let request =
      build_json(builder, payload)?;
    let response =
      dispatch(request, &request_id).await?;
    decode(response).await
  }

  async fn toggle_task(
    &self,
    id: &TaskId
  ) -> Result<TaskDto, ApiError> {
    let (builder, request_id) = tagged(
      Request::put(
        &self.config.toggle_url(id)
      )
    );
    let response =
      dispatch(build(builder)?, &request_id)
        .await?;
    decode(response).await
  }

  async fn delete_task(
    &self,
    id: &TaskId
  ) -> Result<(), ApiError> {
    let (builder, request_id) = tagged(
      Request::delete(
        &self.config.task_url(id)
      )
    );
    // The acknowledgement body is not interpreted.
    dispatch(build(builder)?, &request_id)
      .await
      .map(|_| ())
  }

  async fn health(
    &self
  ) -> Result<HealthDto, ApiError> {
    let (builder, request_id) = tagged(
      Request::get(
        &self.config.health_url()
      )
    );
    let response =
      dispatch(build(builder)?, &request_id)
        .await?;
    decode(response).await
  }
}
