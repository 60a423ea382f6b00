use gloo::console::log;
use tasklist_core::{
  AppConfig,
  PostRenderEffect,
  TaskFilter,
  TaskIntent,
  TaskList,
  TaskSession,
  default_seed
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_node_ref,
  use_state
};

use crate::components::{
  FilterBar,
  TaskForm,
  TodoItem
};

const TASKLIST_CONFIG_TOML: &str =
  include_str!("../assets/tasklist.toml");

fn start_session() -> TaskSession {
  let config = AppConfig::load_or_default(
    TASKLIST_CONFIG_TOML
  );
  match config.session(config.random_ids())
  {
    | Ok(session) => session,
    | Err(error) => {
      tracing::error!(
        "invalid seed tasks; using built-in list: {error:#}"
      );
      TaskSession::new(
        TaskList::from_seed(default_seed())
          .unwrap_or_default()
      )
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let session = use_mut_ref(start_session);
  let view = {
    let session = session.clone();
    use_state(move || session.borrow().view())
  };
  let render_tick =
    use_state(|| 0_u64);
  let heading_ref = use_node_ref();

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and hooks \
         initialized"
      );
      || ()
    });
  }

  // Post-render phase: runs after the DOM
  // reflects the state installed by the
  // last dispatch.
  {
    let session = session.clone();
    let heading_ref = heading_ref.clone();
    use_effect_with(
      *render_tick,
      move |tick| {
        let effects =
          session.borrow_mut().after_render();
        for effect in effects {
          match effect {
            | PostRenderEffect::FocusHeading => {
              ui_debug(
                "heading.focus",
                &format!("render tick {tick}")
              );
              if let Some(heading) = heading_ref
                .cast::<web_sys::HtmlElement>()
                && let Err(error) =
                  heading.focus()
              {
                tracing::warn!(
                  ?error,
                  "failed to focus list heading"
                );
              }
            }
          }
        }
        || ()
      }
    );
  }

  let dispatch = {
    let session = session.clone();
    let view = view.clone();
    let render_tick = render_tick.clone();
    Callback::from(
      move |intent: TaskIntent| {
        let cycle = session
          .borrow_mut()
          .dispatch(intent);
        if !cycle.changed {
          return;
        }
        view.set(session.borrow().view());
        render_tick.set(*render_tick + 1);
      }
    )
  };

  let on_add = {
    let dispatch = dispatch.clone();
    Callback::from(move |name: String| {
      dispatch.emit(TaskIntent::Add(name));
    })
  };

  let on_toggle = {
    let dispatch = dispatch.clone();
    Callback::from(move |id: String| {
      dispatch.emit(
        TaskIntent::ToggleCompleted(id)
      );
    })
  };

  let on_delete = {
    let dispatch = dispatch.clone();
    Callback::from(move |id: String| {
      dispatch
        .emit(TaskIntent::Delete(id));
    })
  };

  let on_edit = {
    let dispatch = dispatch.clone();
    Callback::from(
      move |(id, name): (String, String)| {
        dispatch.emit(TaskIntent::Edit {
          id,
          name
        });
      }
    )
  };

  let on_set_filter = {
    let dispatch = dispatch.clone();
    Callback::from(
      move |filter: TaskFilter| {
        dispatch.emit(
          TaskIntent::SetFilter(filter)
        );
      }
    )
  };

  html! {
      <div class="todoapp stack-large">
          <h1>{ "Daily Task List" }</h1>
          <TaskForm on_submit={on_add} />
          <FilterBar
              options={view.filters.clone()}
              on_select={on_set_filter}
          />
          <h2 id="list-heading" tabindex="-1" ref={heading_ref}>
              { view.heading.clone() }
          </h2>
          <ul role="list" class="todo-list" aria-labelledby="list-heading">
              {
                  for view.visible.iter().cloned().map(|task| html! {
                      <TodoItem
                          key={task.id.clone()}
                          task={task}
                          on_toggle={on_toggle.clone()}
                          on_delete={on_delete.clone()}
                          on_edit={on_edit.clone()}
                      />
                  })
              }
          </ul>
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
