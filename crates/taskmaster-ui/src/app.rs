use std::rc::Rc;

use gloo::console::log;
use taskmaster_core::{
  ClientConfig,
  DeleteConfirmation,
  EditorContext,
  StatusFilter,
  TaskController,
  TaskDraft
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_effect_with,
  use_force_update,
  use_memo
};

use crate::api::HttpTaskApi;
use crate::components::{
  BackendFooter,
  DeleteModal,
  FilterPanel,
  StatsPanel,
  StatusTabs,
  TaskAction,
  TaskList,
  TaskModal,
  ToastStack,
  Toolbar
};

const CLIENT_CONFIG_TOML: &str =
  include_str!("../assets/client.toml");

type Controller =
  TaskController<HttpTaskApi>;

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    ClientConfig::load_or_default(
      CLIENT_CONFIG_TOML
    )
  });
  let controller: Rc<Controller> = {
    let config = (*config).clone();
    use_memo((), move |_| {
      TaskController::with_local_clock(
        HttpTaskApi::new(config)
      )
    })
  };
  let force_update = use_force_update();

  {
    let controller = controller.clone();
    let health_check = config.health_check;
    use_effect_with((), move |_| {
      let subscription =
        controller.subscribe(move || {
          force_update.force_update();
        });
      ui_debug(
        "app.mounted",
        "controller subscribed, loading \
         tasks"
      );

      wasm_bindgen_futures::spawn_local(
        async move {
          controller.load().await;
          if health_check {
            controller.check_health().await;
          }
        }
      );

      move || drop(subscription)
    });
  }

  let on_action = {
    let controller = controller.clone();
    Callback::from(
      move |action: TaskAction| {
        ui_debug(
          "task.action",
          &format!("{action:?}")
        );
        match action {
          | TaskAction::Toggle(id) => {
            let controller =
              controller.clone();
            wasm_bindgen_futures::spawn_local(
              async move {
                controller
                  .toggle_complete(id)
                  .await;
              }
            );
          }
          | TaskAction::Edit(id) => {
            controller.open_edit_dialog(&id);
          }
          | TaskAction::Delete(id) => {
            controller.request_delete(&id);
          }
        }
      }
    )
  };

  let on_add = {
    let controller = controller.clone();
    Callback::from(move |_: MouseEvent| {
      controller.open_create_dialog();
    })
  };

  let on_refresh = {
    let controller = controller.clone();
    Callback::from(move |_: MouseEvent| {
      let controller = controller.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          controller.load().await;
        }
      );
    })
  };

  let on_toggle_filter = {
    let controller = controller.clone();
    Callback::from(move |_: MouseEvent| {
      controller.toggle_filter_panel();
    })
  };

  let on_tab = {
    let controller = controller.clone();
    Callback::from(
      move |tab: StatusFilter| {
        controller.set_status_tab(tab);
      }
    )
  };

  let on_priority_change = {
    let controller = controller.clone();
    Callback::from(move |priority| {
      controller
        .set_priority_filter(priority);
    })
  };

  let on_status_change = {
    let controller = controller.clone();
    Callback::from(move |status| {
      controller.set_status_filter(status);
    })
  };

  let on_date_change = {
    let controller = controller.clone();
    Callback::from(move |date| {
      controller.set_date_filter(date);
    })
  };

  let on_clear_filters = {
    let controller = controller.clone();
    Callback::from(move |_: MouseEvent| {
      controller.clear_filters();
    })
  };

  let on_modal_submit = {
    let controller = controller.clone();
    Callback::from(
      move |(context, draft): (
        EditorContext,
        TaskDraft
      )| {
        ui_debug(
          "dialog.submit",
          context.heading()
        );
        let controller =
          controller.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            controller
              .submit(context, draft)
              .await;
          }
        );
      }
    )
  };

  let on_modal_close = {
    let controller = controller.clone();
    Callback::from(move |()| {
      controller.close_dialog();
    })
  };

  let on_confirm_delete = {
    let controller = controller.clone();
    Callback::from(
      move |confirmation: DeleteConfirmation| {
        let controller =
          controller.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            controller
              .confirm_delete(confirmation)
              .await;
          }
        );
      }
    )
  };

  let on_cancel_delete = {
    let controller = controller.clone();
    Callback::from(move |_: MouseEvent| {
      controller.cancel_delete();
    })
  };

  let on_dismiss = {
    let controller = controller.clone();
    Callback::from(move |id: u64| {
      controller.dismiss_notice(id);
    })
  };

  let filters = controller.filters();
  let loading = controller.is_loading();
  let filters_visible =
    controller.filters_visible();

  html! {
      <div class="taskmaster">
          <header class="topbar">
              <div class="brand">{ "TaskMaster" }</div>
              <Toolbar
                  filters_visible={filters_visible}
                  filters_active={filters.has_refinements()}
                  loading={loading}
                  on_add={on_add.clone()}
                  on_refresh={on_refresh}
                  on_toggle_filter={on_toggle_filter}
              />
          </header>
          <StatsPanel stats={controller.statistics()} />
          <StatusTabs active={filters.tab} on_select={on_tab} />
          {
              if filters_visible {
                  html! {
                      <FilterPanel
                          filters={filters.clone()}
                          on_priority_change={on_priority_change}
                          on_status_change={on_status_change}
                          on_date_change={on_date_change}
                          on_clear={on_clear_filters}
                      />
                  }
              } else {
                  html! {}
              }
          }
          <TaskList
              view={controller.view()}
              loading={loading}
              on_action={on_action}
              on_add_first={on_add}
          />
          {
              if let Some(dialog) = controller.dialog() {
                  html! {
                      <TaskModal
                          key={dialog.seq.to_string()}
                          dialog={dialog.clone()}
                          busy={loading}
                          on_submit={on_modal_submit}
                          on_close={on_modal_close}
                      />
                  }
              } else {
                  html! {}
              }
          }
          {
              if let Some(confirmation) = controller.delete_confirmation() {
                  html! {
                      <DeleteModal
                          confirmation={confirmation}
                          on_confirm={on_confirm_delete}
                          on_cancel={on_cancel_delete}
                      />
                  }
              } else {
                  html! {}
              }
          }
          <ToastStack
              notices={controller.notices()}
              timeout_ms={config.notice_timeout_ms}
              on_dismiss={on_dismiss}
          />
          <BackendFooter status={controller.backend_status()} />
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
